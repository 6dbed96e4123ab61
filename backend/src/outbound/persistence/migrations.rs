//! Embedded schema migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("failed to connect for migrations: {message}")]
    Connection {
        /// Underlying connection failure.
        message: String,
    },

    /// A pending migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Underlying migration failure.
        message: String,
    },

    /// The blocking migration task panicked or was cancelled.
    #[error("migration task failed: {message}")]
    Task {
        /// Join failure description.
        message: String,
    },
}

fn apply_pending(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        MigrationError::Connection {
            message: err.to_string(),
        }
    })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;

    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}

/// Apply all pending migrations to the database at `database_url`.
///
/// Diesel's migration harness is synchronous, so the work runs on the
/// blocking thread pool. Returns the number of migrations applied.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection cannot be opened, a
/// migration fails, or the blocking task does not complete.
pub async fn run_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || apply_pending(&url))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })?
}
