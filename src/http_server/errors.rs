//! Request-boundary errors.
//!
//! Every failure during request processing is caught here and rendered as
//! `{"error": <message>}` with the mapped status code; nothing crashes the
//! process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::inventory::ValidationError;
use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the request boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed client input (400)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The external store reported a fault (500); its message passes
    /// through verbatim
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Anything else that escaped request processing (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
