//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use brewlink_domain::error::{BrewlinkError, NotFoundError, ValidationError};

/// JSON error body returned by the endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BrewlinkError`] to an HTTP response with appropriate status code.
pub struct ApiError(BrewlinkError);

impl From<BrewlinkError> for ApiError {
    fn from(err: BrewlinkError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BrewlinkError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BrewlinkError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
