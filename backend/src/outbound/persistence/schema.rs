//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// User records.
    ///
    /// The `id` column is the primary key and holds the opaque identifier
    /// assigned by the service (UUID v4 text for service-created users).
    users (id) {
        /// Primary key.
        id -> Varchar,
        /// Trimmed user name.
        name -> Varchar,
    }
}
