//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::{ApiError, ApiResult};

/// Base path for versioned API routes.
pub const API_PREFIX: &str = "/api/v1";

/// Register the `/api/v1` user routes and their JSON decoding rules.
///
/// Bodies are decoded as JSON whatever their `Content-Type`.
///
/// Expects an [`state::HttpState`] to be registered as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_api::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(error::json_error_handler),
            )
            .service(users::create_user)
            .service(users::list_users)
            .service(users::get_user)
            .service(users::update_user)
            .service(users::remove_user),
    );
}
