//! Context types for dependency injection in REST API handlers

use std::sync::Arc;
use vizualx_sync::SyncService;

/// Context for the sync endpoints
///
/// Holds only immutable handles; every request derives its answer from
/// fresh reads and probes.
#[derive(Clone)]
pub struct SyncContext {
    /// Status reader and provider probes
    pub sync: Arc<SyncService>,
}

impl SyncContext {
    pub fn new(sync: Arc<SyncService>) -> Self {
        Self { sync }
    }
}
