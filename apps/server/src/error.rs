//! Error handling for the drill API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use drill_core::SegmentError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Segment error: {0}")]
    Segment(#[from] SegmentError),

    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Segment(_) => (StatusCode::BAD_REQUEST, "segment_error"),
            ApiError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };

        tracing::debug!("Request failed: {}", self);

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
