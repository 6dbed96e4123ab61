//! HTTP adapter mapping for request and service failures.
//!
//! Every failure is rendered as `{"error": <message>}`. Validation failures
//! use 400; anything reported by the user service uses 500, including a
//! missing user.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::domain::ports::UserRepositoryError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the users API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The body could not be decoded as the expected JSON document.
    #[error("invalid request")]
    InvalidRequest,

    /// The `name` field was missing or empty.
    #[error("name is required")]
    NameRequired,

    /// The user service reported a failure.
    #[error(transparent)]
    Service(#[from] UserRepositoryError),
}

/// JSON error payload.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "name is required")]
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::NameRequired => StatusCode::BAD_REQUEST,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// `JsonConfig` error handler collapsing every decode failure into
/// [`ApiError::InvalidRequest`].
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejecting undecodable request body");
    ApiError::InvalidRequest.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_of(error: ApiError) -> (StatusCode, Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.expect("response body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[rstest]
    #[case(ApiError::InvalidRequest, StatusCode::BAD_REQUEST, "invalid request")]
    #[case(ApiError::NameRequired, StatusCode::BAD_REQUEST, "name is required")]
    #[case(
        ApiError::from(UserRepositoryError::not_found("123")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "user not found"
    )]
    #[case(
        ApiError::from(UserRepositoryError::query("relation \"users\" does not exist")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "user repository query failed: relation \"users\" does not exist"
    )]
    #[actix_web::test]
    async fn renders_status_and_error_message(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let (actual_status, body) = body_of(error).await;

        assert_eq!(actual_status, status);
        assert_eq!(body, json!({ "error": message }));
    }

    #[rstest]
    fn service_errors_keep_their_variant() {
        let error = ApiError::from(UserRepositoryError::not_found("123"));

        assert!(matches!(
            error,
            ApiError::Service(UserRepositoryError::NotFound { .. })
        ));
    }
}
