//! Service entry-point: loads settings, prepares PostgreSQL and serves the
//! users API until a shutdown signal arrives.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_api::inbound::http::health::HealthState;
use user_api::outbound::persistence::{
    DbPool, MigrationError, PoolConfig, PoolError, run_migrations,
};
use user_api::server::{
    AppSettings, ServerConfig, SettingsError, create_server, ignored_unprefixed_variables,
    run_until_shutdown,
};

/// Failures that stop the process before it starts serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to load configuration: {message}")]
    Config { message: String },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error("failed to bind HTTP server: {0}")]
    Bind(#[source] std::io::Error),
    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn start() -> Result<(), StartupError> {
    for (bare, prefixed) in ignored_unprefixed_variables(|name| std::env::var(name).ok()) {
        warn!(variable = bare, replacement = prefixed, "ignoring unprefixed setting");
    }

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).map_err(|err| StartupError::Config {
            message: err.to_string(),
        })?;

    let database_url = settings.database_url()?;
    let bind_addr = settings.bind_addr()?;

    let applied = run_migrations(&database_url).await?;
    info!(applied, "database schema up to date");

    let mut pool_config = PoolConfig::new(database_url);
    if let Some(max) = settings.db_max_connections() {
        pool_config = pool_config.with_max_size(max);
    }
    let pool = DbPool::new(pool_config).await?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_db_pool(pool);
    let server = create_server(health_state.clone(), &config).map_err(StartupError::Bind)?;

    run_until_shutdown(server, health_state)
        .await
        .map_err(StartupError::Serve)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    start().await.map_err(|err| {
        error!(error = %err, "user-api terminated");
        std::io::Error::other(err)
    })
}
