//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **memory**: process-local repository for tests and local runs
//! - **logging**: `tracing` sink for user service outcomes
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod logging;
pub mod memory;
pub mod persistence;
