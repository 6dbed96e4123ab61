//! Domain primitives, ports and application services.
//!
//! Purpose: keep the user model and its use-cases free of transport and
//! storage concerns. Inbound adapters call [`ports::UserService`]; outbound
//! adapters implement [`ports::UserRepository`] and
//! [`ports::UserOperationLog`].
//!
//! Public surface:
//! - [`User`] and [`UserId`]: the user entity and its opaque identifier.
//! - [`UserAppService`]: the service implementing [`ports::UserService`].

pub mod ports;
pub mod user;
mod user_service;

pub use self::user::{User, UserId};
pub use self::user_service::UserAppService;
