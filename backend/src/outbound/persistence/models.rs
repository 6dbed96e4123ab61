//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{User, UserId};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::from(row.id), row.name)
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id().as_str(),
            name: user.name(),
        }
    }
}

/// Changeset struct for replacing a user's name.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserNameUpdate<'a> {
    pub name: &'a str,
}
