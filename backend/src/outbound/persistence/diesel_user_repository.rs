//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Zero affected rows on `update` and `remove` are reported as
//! [`UserRepositoryError::NotFound`], as is a missing row on `find_by_id`.
//! Every other database failure keeps the server's own message so it can be
//! surfaced to callers unchanged.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

use super::models::{NewUserRow, UserNameUpdate, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain user repository errors.
fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain user repository errors.
fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => UserRepositoryError::query(info.message()),
        other => UserRepositoryError::query(other.to_string()),
    }
}

/// Treat zero affected rows as a missing record.
fn require_affected(rows: usize, id: &UserId) -> Result<(), UserRepositoryError> {
    if rows == 0 {
        return Err(UserRepositoryError::not_found(id.as_str()));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_str()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::from)
            .ok_or_else(|| UserRepositoryError::not_found(id.as_str()))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated_rows = diesel::update(users::table.filter(users::id.eq(user.id().as_str())))
            .set(UserNameUpdate { name: user.name() })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        require_affected(updated_rows, user.id())
    }

    async fn remove(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted_rows = diesel::delete(users::table.filter(users::id.eq(id.as_str())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        require_affected(deleted_rows, id)
    }
}
