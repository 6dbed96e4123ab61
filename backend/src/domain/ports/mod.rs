//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_operation_log;
mod user_repository;
mod user_service;

pub use user_operation_log::{NoOpUserOperationLog, UserOperation, UserOperationLog};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;
