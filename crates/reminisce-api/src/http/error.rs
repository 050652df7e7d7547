//! Application error type mapping to HTTP status codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use reminisce_types::error::MemoryError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed client input.
    Validation(String),
    /// Memory service failure.
    Memory(MemoryError),
    /// Generic internal error.
    Internal(String),
}

impl From<MemoryError> for AppError {
    fn from(e: MemoryError) -> Self {
        AppError::Memory(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Memory(MemoryError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Memory(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Internal(msg) => msg.clone(),
            AppError::Memory(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.message(), "Request failed");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
