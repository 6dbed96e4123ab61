//! Server construction, settings and middleware wiring.

mod config;
mod settings;

pub use config::{SHUTDOWN_TIMEOUT_SECS, ServerConfig};
pub use settings::{AppSettings, SettingsError, ignored_unprefixed_variables};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::UserAppService;
use crate::domain::ports::{UserRepository, UserService};
use crate::inbound::http::configure_api;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::logging::TracingUserOperationLog;
use crate::outbound::memory::InMemoryUserRepository;
use crate::outbound::persistence::DieselUserRepository;

/// Build the user service for `config`.
///
/// Uses the PostgreSQL repository when a pool is configured and the
/// in-memory repository otherwise.
pub fn build_user_service(config: &ServerConfig) -> Arc<dyn UserService> {
    let repository: Arc<dyn UserRepository> = match &config.db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => {
            warn!("no database pool configured; users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    };
    Arc::new(UserAppService::new(
        repository,
        Arc::new(TracingUserOperationLog::new()),
    ))
}

/// Assemble the application: API routes, health probes and tracing.
///
/// Swagger UI is mounted at `/docs` in debug builds.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// Readiness is flipped once the listener is bound. Signal handling is left
/// to [`run_until_shutdown`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_user_service(config)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .disable_signals()
        .shutdown_timeout(config.shutdown_timeout().as_secs())
        .bind(config.bind_addr())?
        .run();

    info!(addr = %config.bind_addr(), "server listening");
    health_state.mark_ready();
    Ok(server)
}

/// Resolve when the process receives SIGINT or SIGTERM.
///
/// # Errors
/// Returns an error when the signal handlers cannot be installed.
pub async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), std::io::Error>(())
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        result = terminate => result,
    }
}

/// Drive `server` until it stops or a shutdown signal arrives.
///
/// On a signal both health probes start failing and in-flight requests get
/// the configured shutdown window to finish.
///
/// # Errors
/// Propagates [`std::io::Error`] raised by the server.
pub async fn run_until_shutdown(
    server: Server,
    health_state: web::Data<HealthState>,
) -> std::io::Result<()> {
    let handle = server.handle();
    let watcher = actix_web::rt::spawn(async move {
        if let Err(error) = shutdown_signal().await {
            warn!(%error, "cannot listen for shutdown signals");
            return;
        }
        info!("shutdown signal received; draining requests");
        health_state.mark_unhealthy();
        handle.stop(true).await;
    });

    let result = server.await;
    watcher.abort();
    info!("server stopped");
    result
}
