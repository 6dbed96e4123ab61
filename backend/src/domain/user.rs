//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque user identifier.
///
/// Identifiers assigned by the service are UUID v4 strings, but lookups
/// accept any string so that callers can address records by whatever id
/// they were handed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Application user.
///
/// ## Invariants
/// - `name` never carries leading or trailing whitespace.
///
/// Emptiness of the name is not checked here; the HTTP adapter rejects
/// empty names before a `User` is built.
///
/// # Examples
/// ```
/// use user_api::domain::{User, UserId};
///
/// let user = User::new(UserId::new("42"), "  John  ");
/// assert_eq!(user.name(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Build a user, trimming surrounding whitespace from `name`.
    pub fn new(id: UserId, name: impl AsRef<str>) -> Self {
        Self {
            id,
            name: name.as_ref().trim().to_owned(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Trimmed display label.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[cfg(test)]
mod tests;
