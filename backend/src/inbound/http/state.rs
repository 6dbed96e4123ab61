//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the `UserService` port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User use-cases.
    pub users: Arc<dyn UserService>,
}

impl HttpState {
    /// Construct state from the user service port.
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}
