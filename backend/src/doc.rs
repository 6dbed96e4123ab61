//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users endpoints, the health probes and the
//! request and response schemas. The document is served by Swagger UI in
//! debug builds and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::users::{MessageBody, UserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "CRUD interface for users plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::remove_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserRequest, UserResponse, MessageBody, ErrorBody)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
