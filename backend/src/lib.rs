//! User management service.
//!
//! A layered CRUD API over a single user entity: the [`domain`] holds the
//! entity, its ports and the application service, [`inbound::http`] exposes
//! the REST surface and [`outbound`] provides PostgreSQL, in-memory and
//! logging adapters. [`server`] wires everything into an Actix server.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
