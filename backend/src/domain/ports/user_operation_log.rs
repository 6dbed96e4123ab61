//! Port for reporting user service outcomes.
//!
//! The service reports every success and failure through this port so it can
//! be tested without a logging backend. Reporting is fire-and-forget: it
//! returns nothing and must not influence the operation result.

use std::fmt;

use crate::domain::UserId;

use super::UserRepositoryError;

/// User service operation being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserOperation {
    /// `UserService::create`.
    Create,
    /// `UserService::get_all`.
    GetAll,
    /// `UserService::get_user`.
    GetUser,
    /// `UserService::update`.
    Update,
    /// `UserService::remove`.
    Remove,
}

impl UserOperation {
    /// Stable label used in structured log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::GetAll => "get_all",
            Self::GetUser => "get_user",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for UserOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome sink for the user service.
pub trait UserOperationLog: Send + Sync {
    /// Record a successful operation, with the affected user when there is one.
    fn record_success(&self, operation: UserOperation, user_id: Option<&UserId>);

    /// Record a failed operation and its cause.
    fn record_failure(&self, operation: UserOperation, error: &UserRepositoryError);
}

/// Log sink that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpUserOperationLog;

impl UserOperationLog for NoOpUserOperationLog {
    fn record_success(&self, _operation: UserOperation, _user_id: Option<&UserId>) {}

    fn record_failure(&self, _operation: UserOperation, _error: &UserRepositoryError) {}
}
