//! Tracing-backed [`UserOperationLog`] adapter.
//!
//! Successes are emitted at `info`, failures at `error` with the repository
//! error attached. When a request trace identifier is in scope it is added
//! to each event so service logs line up with the HTTP access trail.

use tracing::{error, info};

use crate::domain::UserId;
use crate::domain::ports::{UserOperation, UserOperationLog, UserRepositoryError};
use crate::middleware::trace::TraceId;

/// Structured logging sink for user service outcomes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingUserOperationLog;

impl TracingUserOperationLog {
    /// Create the adapter.
    pub fn new() -> Self {
        Self
    }
}

fn success_message(operation: UserOperation) -> &'static str {
    match operation {
        UserOperation::Create => "user created",
        UserOperation::GetAll => "all users retrieved",
        UserOperation::GetUser => "user retrieved",
        UserOperation::Update => "user updated",
        UserOperation::Remove => "user removed",
    }
}

fn failure_message(operation: UserOperation) -> &'static str {
    match operation {
        UserOperation::Create => "can't create user",
        UserOperation::GetAll => "can't retrieve all users",
        UserOperation::GetUser => "can't retrieve user",
        UserOperation::Update => "can't update user",
        UserOperation::Remove => "can't remove user",
    }
}

impl UserOperationLog for TracingUserOperationLog {
    fn record_success(&self, operation: UserOperation, user_id: Option<&UserId>) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        info!(
            operation = operation.as_str(),
            user_id = user_id.map(UserId::as_str),
            trace_id = trace_id.as_deref(),
            "{}",
            success_message(operation)
        );
    }

    fn record_failure(&self, operation: UserOperation, error: &UserRepositoryError) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(
            operation = operation.as_str(),
            error = %error,
            not_found = error.is_not_found(),
            trace_id = trace_id.as_deref(),
            "{}",
            failure_message(operation)
        );
    }
}
