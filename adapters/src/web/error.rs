use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::debug;

use application::ports::out_::ServiceError;

/// Every failure the HTTP surface reports. Rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    /// The request body could not be read as an action.
    InvalidBody { status: StatusCode, message: String },
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(status = %rejection.status(), "Rejected request body");
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Service(err) => {
                let status = match err {
                    ServiceError::SessionNotFound(_) => StatusCode::NOT_FOUND,
                    ServiceError::SessionLimitReached(_) => StatusCode::SERVICE_UNAVAILABLE,
                };
                (status, err.to_string())
            }
            ApiError::InvalidBody { status, message } => (status, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
