//! Users API handlers.
//!
//! ```text
//! POST   /api/v1/users       {"name":"John"}
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}  {"name":"Updated John"}
//! DELETE /api/v1/users/{id}
//! ```
//!
//! Names are checked for emptiness here and trimmed by the domain entity.
//! Unknown body fields, including a caller-supplied `id`, are ignored.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Request body for creating or renaming a user.
///
/// A missing or `null` `name` is read as an empty string.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserRequest {
    /// Display name for the user.
    #[serde(default)]
    #[schema(example = "John")]
    pub name: Option<String>,
}

impl UserRequest {
    fn validated_name(self) -> ApiResult<String> {
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            return Err(ApiError::NameRequired);
        }
        Ok(name)
    }
}

/// User representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    /// Opaque user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Trimmed display name.
    #[schema(example = "John")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name().to_owned(),
            id: user.id().as_str().to_owned(),
        }
    }
}

/// Confirmation payload for mutations without a body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageBody {
    /// Outcome description.
    #[schema(example = "user updated")]
    pub message: String,
}

impl MessageBody {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Create a user with a server-generated identifier.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request or empty name", body = ErrorBody),
        (status = 500, description = "Service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let name = payload.into_inner().validated_name()?;
    let created = state.users.create(User::new(UserId::new(""), name)).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// List all users.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.get_all().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch a single user.
///
/// A missing user is reported as a service failure (500).
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 500, description = "Service failure, including unknown id", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = UserId::from(path.into_inner());
    let user = state.users.get_user(&id).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Replace a user's name.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageBody),
        (status = 400, description = "Invalid request or empty name", body = ErrorBody),
        (status = 500, description = "Service failure, including unknown id", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<MessageBody>> {
    let name = payload.into_inner().validated_name()?;
    let user = User::new(UserId::from(path.into_inner()), name);
    state.users.update(user).await?;
    Ok(web::Json(MessageBody::new("user updated")))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User removed", body = MessageBody),
        (status = 500, description = "Service failure, including unknown id", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "removeUser"
)]
#[delete("/users/{id}")]
pub async fn remove_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    let id = UserId::from(path.into_inner());
    state.users.remove(&id).await?;
    Ok(web::Json(MessageBody::new("user removed")))
}

#[cfg(test)]
mod tests;
