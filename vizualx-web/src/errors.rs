//! Web-specific error types and conversions
//!
//! Error bodies are flat JSON objects. Client errors carry a short `error`
//! title and a human `message`; internal errors carry an `error` summary
//! and a machine-readable `code`, with the internal detail only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Web-specific error type for HTTP API operations
#[derive(Debug, Error)]
pub enum WebError {
    #[error("{error}: {message}")]
    NotFound { error: String, message: String },

    #[error("{summary} [{code}]: {detail}")]
    Internal {
        summary: String,
        code: String,
        detail: String,
    },
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            WebError::NotFound { .. } => "NOT_FOUND",
            WebError::Internal { code, .. } => code,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            WebError::Internal {
                summary,
                code,
                detail,
            } => {
                // Detail can hold paths and parser output; it stays in the logs
                error!(code = %code, "{}: {}", summary, detail);
                json!({ "error": summary, "code": code })
            }
            WebError::NotFound { error, message } => {
                json!({ "error": error, "message": message })
            }
        };

        (status, Json(body)).into_response()
    }
}

// Common error constructors
impl WebError {
    /// 404 with a short title and a hint for the client
    pub fn not_found(error: impl Into<String>, message: impl Into<String>) -> Self {
        WebError::NotFound {
            error: error.into(),
            message: message.into(),
        }
    }

    /// 500 with a client-safe summary; `detail` is logged, never sent
    pub fn internal(
        summary: impl Into<String>,
        code: impl Into<String>,
        detail: impl std::fmt::Display,
    ) -> Self {
        WebError::Internal {
            summary: summary.into(),
            code: code.into(),
            detail: detail.to_string(),
        }
    }
}
