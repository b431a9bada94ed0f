//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use relayhub_domain::error::ValidationError;

/// JSON error body returned for rejected requests.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Maps [`ValidationError`] to a `400 Bad Request` response.
#[derive(Debug)]
pub struct ApiError(ValidationError);

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "rejecting request");
        let body = ErrorBody {
            success: false,
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
