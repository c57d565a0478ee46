//! Sync error types

use std::path::PathBuf;

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Faults raised by the sync core.
///
/// Provider outages are not errors: they are reported inside
/// [`crate::HeartbeatResult`]. A missing status artifact is not an error
/// either; readers return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to read sync status artifact {path}: {source}")]
    StatusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed sync status artifact {path}: {source}")]
    StatusParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl SyncError {
    /// Machine-readable code used by the HTTP facade
    pub fn code(&self) -> &'static str {
        match self {
            SyncError::StatusRead { .. } => "STATUS_READ_FAILED",
            SyncError::StatusParse { .. } => "STATUS_MALFORMED",
            SyncError::Client(_) => "HTTP_CLIENT_ERROR",
        }
    }
}
