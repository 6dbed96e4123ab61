//! Driving port for user management use-cases.
//!
//! Inbound adapters (HTTP handlers) depend on this port rather than on the
//! repository, so identity assignment and outcome logging stay in one place.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::UserRepositoryError;

/// Domain use-case port for creating, reading, updating and removing users.
///
/// Errors are the repository's own [`UserRepositoryError`] values, passed
/// through without translation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Store a new user under a freshly generated identifier.
    ///
    /// Any identifier carried by `user` is discarded.
    async fn create(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Return every stored user.
    async fn get_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Load a single user.
    async fn get_user(&self, id: &UserId) -> Result<User, UserRepositoryError>;

    /// Replace the name of the user identified by `user.id()`.
    async fn update(&self, user: User) -> Result<(), UserRepositoryError>;

    /// Remove a user.
    async fn remove(&self, id: &UserId) -> Result<(), UserRepositoryError>;
}
