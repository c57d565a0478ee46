//! Sync status artifact reading and freshness policy

use crate::errors::{SyncError, SyncResult};
use crate::types::SyncStatus;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Keys owned by the HTTP facade; dropped from artifact payloads on read
const RESERVED_KEYS: [&str; 2] = ["fresh", "error"];

/// Source of the last-known sync status
#[async_trait::async_trait]
pub trait StatusSource: Send + Sync {
    /// Read the current status; `Ok(None)` when nothing has been written yet
    async fn read_status(&self) -> SyncResult<Option<SyncStatus>>;
}

/// Status artifact stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse raw artifact bytes into a [`SyncStatus`]
    pub fn parse(&self, bytes: &[u8]) -> SyncResult<SyncStatus> {
        let parse_err = |source| SyncError::StatusParse {
            path: self.path.clone(),
            source,
        };

        let mut value: JsonValue = serde_json::from_slice(bytes).map_err(parse_err)?;

        if let JsonValue::Object(map) = &mut value {
            if !map.contains_key("generatedAt") {
                if let Some(timestamp) = map.remove("timestamp") {
                    map.insert("generatedAt".to_string(), timestamp);
                }
            }

            let has_source = map
                .get("source")
                .and_then(JsonValue::as_str)
                .is_some_and(|s| !s.trim().is_empty());
            if !has_source {
                map.insert(
                    "source".to_string(),
                    JsonValue::String(self.path.display().to_string()),
                );
            }

            for key in RESERVED_KEYS {
                map.remove(key);
            }
        }

        serde_json::from_value(value).map_err(parse_err)
    }
}

#[async_trait::async_trait]
impl StatusSource for FileStatusSource {
    async fn read_status(&self) -> SyncResult<Option<SyncStatus>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No sync status artifact at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(SyncError::StatusRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        trace!("Read {} bytes from {}", bytes.len(), self.path.display());
        self.parse(&bytes).map(Some)
    }
}

/// Whether a status generated at `generated_at` is still fresh at `now`.
///
/// The window is inclusive. A timestamp in the future counts as fresh.
pub fn is_fresh(generated_at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    match chrono::Duration::from_std(window) {
        Ok(window) => now.signed_duration_since(generated_at) <= window,
        // Window too large to represent; nothing can be older than it
        Err(_) => true,
    }
}

/// Reads the sync status and applies the freshness window
#[derive(Clone)]
pub struct SyncStatusReader {
    source: Arc<dyn StatusSource>,
    freshness_window: Duration,
}

impl std::fmt::Debug for SyncStatusReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncStatusReader")
            .field("freshness_window", &self.freshness_window)
            .finish_non_exhaustive()
    }
}

impl SyncStatusReader {
    pub fn new(source: Arc<dyn StatusSource>, freshness_window: Duration) -> Self {
        Self {
            source,
            freshness_window,
        }
    }

    /// Reader over a JSON artifact file
    pub fn from_file(path: impl Into<PathBuf>, freshness_window: Duration) -> Self {
        Self::new(Arc::new(FileStatusSource::new(path)), freshness_window)
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    pub async fn get_sync_status(&self) -> SyncResult<Option<SyncStatus>> {
        self.source.read_status().await
    }

    /// `false` when no status exists
    pub async fn is_sync_status_fresh(&self) -> SyncResult<bool> {
        Ok(self
            .get_sync_status()
            .await?
            .is_some_and(|status| self.is_fresh_at(&status, Utc::now())))
    }

    pub fn is_fresh_at(&self, status: &SyncStatus, now: DateTime<Utc>) -> bool {
        is_fresh(status.generated_at, now, self.freshness_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn source() -> FileStatusSource {
        FileStatusSource::new("/var/lib/vizualx/sync-status.json")
    }

    #[test]
    fn test_freshness_boundary_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let window = Duration::from_secs(300);

        assert!(is_fresh(now - chrono::Duration::seconds(299), now, window));
        assert!(is_fresh(now - chrono::Duration::seconds(300), now, window));
        assert!(!is_fresh(now - chrono::Duration::seconds(301), now, window));
        assert!(is_fresh(now + chrono::Duration::seconds(10), now, window));
    }

    #[test]
    fn test_parse_accepts_timestamp_alias() {
        let status = source()
            .parse(br#"{"timestamp": "2026-10-19T12:00:00Z", "source": "infinity-sync"}"#)
            .unwrap();

        assert_eq!(
            status.generated_at,
            Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
        );
        assert!(!status.payload.contains_key("timestamp"));
    }

    #[test]
    fn test_parse_defaults_source_to_path() {
        let status = source()
            .parse(br#"{"generatedAt": "2026-10-19T12:00:00Z", "source": ""}"#)
            .unwrap();
        assert_eq!(status.source, "/var/lib/vizualx/sync-status.json");
    }

    #[test]
    fn test_parse_strips_reserved_keys() {
        let status = source()
            .parse(br#"{"generatedAt": "2026-10-19T12:00:00Z", "fresh": false, "error": "x", "branch": "main"}"#)
            .unwrap();

        assert!(!status.payload.contains_key("fresh"));
        assert!(!status.payload.contains_key("error"));
        assert_eq!(status.payload["branch"], "main");
    }

    #[test]
    fn test_parse_rejects_missing_timestamp() {
        let result = source().parse(br#"{"source": "infinity-sync"}"#);
        assert!(matches!(result, Err(SyncError::StatusParse { .. })));

        let result = source().parse(b"[1, 2, 3]");
        assert!(matches!(result, Err(SyncError::StatusParse { .. })));
    }
}
