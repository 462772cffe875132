//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use trivia_core::{FetchError, LoadError, ParseError};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Conflict: {0}")]
    Superseded(String),

    #[error("No flashcards loaded")]
    NoSession,
}

impl From<LoadError> for ApiError {
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::Fetch(e) => Self::Fetch(e),
            LoadError::Parse(e) => Self::Parse(e),
            superseded @ LoadError::Superseded { .. } => Self::Superseded(superseded.to_string()),
        }
    }
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
            ApiError::Fetch(FetchError::NotFound { .. })
            | ApiError::Fetch(FetchError::Status { status: 404, .. }) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::Fetch(_) => (StatusCode::BAD_GATEWAY, "fetch_error"),
            ApiError::Parse(_) => (StatusCode::UNPROCESSABLE_ENTITY, "parse_error"),
            ApiError::Superseded(_) => (StatusCode::CONFLICT, "superseded"),
            ApiError::NoSession => (StatusCode::CONFLICT, "no_session"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
