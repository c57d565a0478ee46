//! REST API specific error types and conversions with sanitization

use axum::response::{IntoResponse, Response};
use thiserror::Error;
use vizualx_sync::{ProviderParseError, SyncError};
use vizualx_web::WebError;

/// Hint returned alongside a 404 for a missing status artifact
pub const NO_STATUS_HINT: &str = "Run the sync script to generate a sync status artifact";

/// REST API specific error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error("No sync status available")]
    NoSyncStatus,

    #[error("{0}")]
    UnknownProvider(#[from] ProviderParseError),

    /// Sync core fault; `context` is the client-safe summary
    #[error("{context}: {source}")]
    Sync {
        context: &'static str,
        #[source]
        source: SyncError,
    },
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Attach a client-safe summary to a sync fault
    pub fn sync(context: &'static str) -> impl FnOnce(SyncError) -> Self {
        move |source| RestError::Sync { context, source }
    }

    /// Convert to the web error carrying the HTTP mapping
    pub fn into_web_error(self) -> WebError {
        match self {
            RestError::NoSyncStatus => WebError::not_found("No sync status available", NO_STATUS_HINT),
            RestError::UnknownProvider(err) => WebError::not_found("Unknown provider", err.to_string()),
            RestError::Sync { context, source } => WebError::internal(context, source.code(), &source),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.into_web_error().into_response()
    }
}
