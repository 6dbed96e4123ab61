//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use crate::outbound::persistence::DbPool;

/// Seconds the server waits for in-flight requests during shutdown.
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            shutdown_timeout: Duration::from_secs(SHUTDOWN_TIMEOUT_SECS),
        }
    }

    /// Attach a database connection pool for the PostgreSQL repository.
    ///
    /// Without a pool, users are kept in process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the graceful shutdown window.
    #[must_use]
    pub fn shutdown_timeout(&self) -> Duration {
        self.shutdown_timeout
    }
}
