//! Sync status and provider heartbeat aggregation
//!
//! This crate holds the core of the Vizual X sync service:
//!
//! - [`HeartbeatChecker`]: bounded-latency health probes against GitHub,
//!   the cloud provider and the CDN. Probe failures are folded into the
//!   returned [`HeartbeatResult`], never raised.
//! - [`SyncStatusReader`]: reads the status artifact written by the external
//!   sync script and applies the freshness window.
//! - [`SyncService`]: fans out to both concurrently and assembles a
//!   [`SyncOverview`] that always lists every provider.

pub mod client;
pub mod components;
pub mod config;
pub mod errors;
pub mod overview;
pub mod status;
pub mod types;

// Re-export main types for convenience
pub use client::{HeartbeatChecker, HeartbeatProbe};
pub use components::{ComponentState, ComponentSync, SyncComponent, SyncComponents};
pub use config::HeartbeatConfig;
pub use errors::{SyncError, SyncResult};
pub use overview::SyncService;
pub use status::{is_fresh, FileStatusSource, StatusSource, SyncStatusReader};
pub use types::{
    ErrorKind, HeartbeatResult, HeartbeatSnapshot, Provider, ProviderParseError, SyncOverview,
    SyncStatus,
};
