//! Process settings loaded via OrthoConfig.
//!
//! Values come from `USER_API_*` environment variables, command-line flags
//! or a `.user_api.toml` file. Database credentials have no defaults and
//! must be supplied.
//!
//! Deployments configured with bare variable names must rename them:
//!
//! | Before        | After                  |
//! |---------------|------------------------|
//! | `PORT`        | `USER_API_PORT`        |
//! | `DB_USER`     | `USER_API_DB_USER`     |
//! | `DB_PASSWORD` | `USER_API_DB_PASSWORD` |
//! | `DB_NAME`     | `USER_API_DB_NAME`     |
//! | `DB_HOST`     | `USER_API_DB_HOST`     |
//! | `DB_PORT`     | `USER_API_DB_PORT`     |
//!
//! [`ignored_unprefixed_variables`] reports bare names that are still set
//! without their replacement so startup can warn about them.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SSLMODE: &str = "disable";

/// Bare variable names paired with the prefixed names that replace them.
const UNPREFIXED_VARIABLES: [(&str, &str); 6] = [
    ("PORT", "USER_API_PORT"),
    ("DB_USER", "USER_API_DB_USER"),
    ("DB_PASSWORD", "USER_API_DB_PASSWORD"),
    ("DB_NAME", "USER_API_DB_NAME"),
    ("DB_HOST", "USER_API_DB_HOST"),
    ("DB_PORT", "USER_API_DB_PORT"),
];

/// List bare variables that are set while their prefixed replacement is not.
///
/// `lookup` resolves an environment variable name.
///
/// # Examples
/// ```
/// use user_api::server::ignored_unprefixed_variables;
///
/// let ignored = ignored_unprefixed_variables(|name| {
///     (name == "DB_HOST").then(|| "db.internal".to_owned())
/// });
/// assert_eq!(ignored, vec![("DB_HOST", "USER_API_DB_HOST")]);
/// ```
pub fn ignored_unprefixed_variables<F>(lookup: F) -> Vec<(&'static str, &'static str)>
where
    F: Fn(&str) -> Option<String>,
{
    UNPREFIXED_VARIABLES
        .into_iter()
        .filter(|(bare, prefixed)| lookup(bare).is_some() && lookup(prefixed).is_none())
        .collect()
}

/// Failures turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The database connection URL could not be assembled.
    #[error("invalid database url: {message}")]
    DatabaseUrl {
        /// What was rejected.
        message: String,
    },

    /// The listen address did not resolve.
    #[error("invalid bind address {address}: {message}")]
    BindAddress {
        /// The `host:port` pair that failed.
        address: String,
        /// Resolver failure.
        message: String,
    },
}

/// Settings for the HTTP listener and PostgreSQL connection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_API")]
pub struct AppSettings {
    /// Port the HTTP server listens on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Interface the HTTP server binds to. Defaults to all interfaces.
    pub host: Option<String>,
    /// Database role.
    pub db_user: String,
    /// Database password.
    pub db_password: String,
    /// Database name.
    pub db_name: String,
    /// Database host name or address.
    pub db_host: String,
    /// Database port.
    pub db_port: u16,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// libpq `sslmode` passed in the connection URL.
    pub db_sslmode: Option<String>,
}

impl AppSettings {
    /// Interface to bind, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured `sslmode`, falling back to `disable`.
    pub fn db_sslmode(&self) -> &str {
        self.db_sslmode.as_deref().unwrap_or(DEFAULT_SSLMODE)
    }

    /// Configured pool size, if any.
    pub fn db_max_connections(&self) -> Option<u32> {
        self.db_max_connections
    }

    /// Build the `postgres://` connection URL.
    ///
    /// Credentials are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::DatabaseUrl`] when the host is not a valid
    /// URL host.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let invalid = |message: &str| SettingsError::DatabaseUrl {
            message: message.to_owned(),
        };

        let mut url = Url::parse("postgres://localhost")
            .map_err(|err| invalid(&err.to_string()))?;
        url.set_host(Some(&self.db_host))
            .map_err(|err| invalid(&format!("host {}: {err}", self.db_host)))?;
        url.set_port(Some(self.db_port))
            .map_err(|()| invalid("port cannot be set"))?;
        url.set_username(&self.db_user)
            .map_err(|()| invalid("user cannot be set"))?;
        url.set_password(Some(&self.db_password))
            .map_err(|()| invalid("password cannot be set"))?;
        url.set_path(&format!("/{}", self.db_name));
        url.query_pairs_mut()
            .append_pair("sslmode", self.db_sslmode());

        Ok(url.into())
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddress`] when the host does not resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.host(), self.port);
        let failure = |message: String| SettingsError::BindAddress {
            address: address.clone(),
            message,
        };

        let mut resolved = (self.host(), self.port)
            .to_socket_addrs()
            .map_err(|err| failure(err.to_string()))?;
        resolved
            .next()
            .ok_or_else(|| failure("no addresses resolved".to_owned()))
    }
}
