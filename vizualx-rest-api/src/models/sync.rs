//! Sync endpoint response models

use serde::{Deserialize, Serialize};
use vizualx_sync::SyncStatus;

/// `GET /api/sync/status` body: the status fields plus `fresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatusResponse {
    #[serde(flatten)]
    pub status: SyncStatus,
    pub fresh: bool,
}
