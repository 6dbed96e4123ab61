//! In-memory `UserRepository` implementation.
//!
//! Keeps users in a `BTreeMap` keyed by identifier so listings come back in
//! a stable order. It honours the same contract as the PostgreSQL adapter,
//! which makes it suitable for HTTP tests and local experiments without a
//! database.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, String>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let entries = users
            .into_iter()
            .map(|user| (user.id().clone(), user.name().to_owned()))
            .collect();
        Self {
            users: RwLock::new(entries),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::connection("in-memory store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.contains_key(user.id()) {
            return Err(UserRepositoryError::query(format!(
                "duplicate key value violates primary key for id {}",
                user.id()
            )));
        }
        users.insert(user.id().clone(), user.name().to_owned());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let users = self.users.read().map_err(poisoned)?;
        users
            .get(id)
            .map(|name| User::new(id.clone(), name))
            .ok_or_else(|| UserRepositoryError::not_found(id.as_str()))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users
            .iter()
            .map(|(id, name)| User::new(id.clone(), name))
            .collect())
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().map_err(poisoned)?;
        match users.get_mut(user.id()) {
            Some(name) => {
                user.name().clone_into(name);
                Ok(())
            }
            None => Err(UserRepositoryError::not_found(user.id().as_str())),
        }
    }

    async fn remove(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().map_err(poisoned)?;
        users
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserRepositoryError::not_found(id.as_str()))
    }
}
