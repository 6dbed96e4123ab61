//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// No stored user matches the requested identifier.
        NotFound { id: String } => "user not found",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Persistence contract for [`User`] records.
///
/// `update` and `remove` report [`UserRepositoryError::NotFound`] when no
/// record was affected, even though the store itself raised no error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError>;

    /// Fetch every stored user. Returns an empty list when none exist.
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Replace the name of an existing user.
    async fn update(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Delete a user by identifier.
    async fn remove(&self, id: &UserId) -> Result<(), UserRepositoryError>;
}
