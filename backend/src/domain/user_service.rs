//! User management application service.
//!
//! This module implements the [`UserService`] driving port on top of a
//! [`UserRepository`], assigning identities on creation and reporting every
//! outcome through a [`UserOperationLog`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    UserOperation, UserOperationLog, UserRepository, UserRepositoryError, UserService,
};
use crate::domain::{User, UserId};

/// User service implementing the driving port.
///
/// Repository errors are returned exactly as the repository produced them
/// so callers can still tell [`UserRepositoryError::NotFound`] apart from
/// store failures.
pub struct UserAppService<R: ?Sized, L: ?Sized> {
    repository: Arc<R>,
    log: Arc<L>,
}

impl<R: ?Sized, L: ?Sized> Clone for UserAppService<R, L> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            log: Arc::clone(&self.log),
        }
    }
}

impl<R: ?Sized, L: ?Sized> UserAppService<R, L> {
    /// Create a new service with the given repository and outcome log.
    pub fn new(repository: Arc<R>, log: Arc<L>) -> Self {
        Self { repository, log }
    }
}

impl<R, L> UserAppService<R, L>
where
    R: UserRepository + ?Sized,
    L: UserOperationLog + ?Sized,
{
    fn report<T>(
        &self,
        operation: UserOperation,
        result: Result<T, UserRepositoryError>,
        user_id: Option<&UserId>,
    ) -> Result<T, UserRepositoryError> {
        match &result {
            Ok(_) => self.log.record_success(operation, user_id),
            Err(error) => self.log.record_failure(operation, error),
        }
        result
    }
}

#[async_trait]
impl<R, L> UserService for UserAppService<R, L>
where
    R: UserRepository + ?Sized,
    L: UserOperationLog + ?Sized,
{
    async fn create(&self, user: User) -> Result<User, UserRepositoryError> {
        let assigned = User::new(UserId::random(), user.name());
        let result = self.repository.create(&assigned).await;
        self.report(UserOperation::Create, result, Some(assigned.id()))?;
        Ok(assigned)
    }

    async fn get_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let result = self.repository.find_all().await;
        self.report(UserOperation::GetAll, result, None)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let result = self.repository.find_by_id(id).await;
        self.report(UserOperation::GetUser, result, Some(id))
    }

    async fn update(&self, user: User) -> Result<(), UserRepositoryError> {
        let result = self.repository.update(&user).await;
        self.report(UserOperation::Update, result, Some(user.id()))
    }

    async fn remove(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let result = self.repository.remove(id).await;
        self.report(UserOperation::Remove, result, Some(id))
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
