//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the `UserRepository` implementation backed by PostgreSQL via
//! `diesel-async` and `bb8` connection pooling, plus the embedded schema
//! migrations applied at startup.
//!
//! Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay internal to this module. All database errors are mapped to
//! [`UserRepositoryError`](crate::domain::ports::UserRepositoryError).
//!
//! # Example
//!
//! ```no_run
//! use user_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), user_api::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
