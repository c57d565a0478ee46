//! Concurrent aggregation of sync status and provider heartbeats

use crate::client::{HeartbeatChecker, HeartbeatProbe};
use crate::components::SyncComponents;
use crate::config::HeartbeatConfig;
use crate::errors::SyncResult;
use crate::status::SyncStatusReader;
use crate::types::{ErrorKind, HeartbeatResult, HeartbeatSnapshot, Provider, SyncOverview, SyncStatus};
use chrono::Utc;
use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info};
use vizualx_config::SyncConfig;

/// Sync service combining the status reader with every provider probe
#[derive(Clone)]
pub struct SyncService {
    probe: Arc<dyn HeartbeatProbe>,
    reader: SyncStatusReader,
}

impl std::fmt::Debug for SyncService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncService")
            .field("reader", &self.reader)
            .finish_non_exhaustive()
    }
}

impl SyncService {
    pub fn new(probe: Arc<dyn HeartbeatProbe>, reader: SyncStatusReader) -> Self {
        Self { probe, reader }
    }

    /// Build the service from the sync and HTTP configuration domains
    pub fn from_config(sync: &SyncConfig, http: HeartbeatConfig) -> SyncResult<Self> {
        let checker = HeartbeatChecker::new(sync.providers.clone(), http)?;
        let reader = SyncStatusReader::from_file(sync.status_path.clone(), sync.freshness_window);

        info!(
            "Sync service reading {} with {}s freshness window",
            sync.status_path.display(),
            sync.freshness_window.as_secs()
        );

        Ok(Self::new(Arc::new(checker), reader))
    }

    pub fn reader(&self) -> &SyncStatusReader {
        &self.reader
    }

    pub async fn get_sync_status(&self) -> SyncResult<Option<SyncStatus>> {
        self.reader.get_sync_status().await
    }

    pub async fn is_sync_status_fresh(&self) -> SyncResult<bool> {
        self.reader.is_sync_status_fresh().await
    }

    /// Status together with its freshness, from a single read
    pub async fn get_sync_status_with_freshness(&self) -> SyncResult<Option<(SyncStatus, bool)>> {
        let now = Utc::now();
        Ok(self.reader.get_sync_status().await?.map(|status| {
            let fresh = self.reader.is_fresh_at(&status, now);
            (status, fresh)
        }))
    }

    /// Per-component view of the current status, `None` when no status exists
    pub async fn get_sync_components(&self) -> SyncResult<Option<SyncComponents>> {
        Ok(self
            .get_sync_status_with_freshness()
            .await?
            .map(|(status, fresh)| SyncComponents::from_status(&status, fresh)))
    }

    pub async fn check_heartbeat(&self, provider: Provider) -> HeartbeatResult {
        self.probe.check_heartbeat(provider).await
    }

    /// Probe every provider concurrently; the result holds every provider key
    pub async fn get_all_heartbeats(&self) -> HeartbeatSnapshot {
        HeartbeatSnapshot {
            heartbeats: self.probe_all().await,
            timestamp: Utc::now(),
        }
    }

    /// Status and all heartbeats, fetched concurrently.
    ///
    /// A status read fault is logged and reported as `status: null`.
    pub async fn get_sync_overview(&self) -> SyncOverview {
        let (status, heartbeats) = tokio::join!(self.get_sync_status_with_freshness(), self.probe_all());

        let (status, status_fresh) = match status {
            Ok(Some((status, fresh))) => (Some(status), fresh),
            Ok(None) => (None, false),
            Err(e) => {
                error!(code = e.code(), "Sync status unavailable for overview: {}", e);
                (None, false)
            }
        };

        SyncOverview {
            status,
            status_fresh,
            heartbeats,
            generated_at: Utc::now(),
        }
    }

    async fn probe_all(&self) -> BTreeMap<Provider, HeartbeatResult> {
        let handles = Provider::ALL.into_iter().map(|provider| {
            let probe = Arc::clone(&self.probe);
            let handle = tokio::spawn(async move { probe.check_heartbeat(provider).await });
            async move { (provider, handle.await) }
        });

        let heartbeats: BTreeMap<_, _> = join_all(handles)
            .await
            .into_iter()
            .map(|(provider, joined)| {
                let result = joined.unwrap_or_else(|e| {
                    error!(provider = %provider, "Heartbeat probe task failed: {}", e);
                    HeartbeatResult::unreachable(
                        provider,
                        ErrorKind::Unreachable,
                        "heartbeat probe aborted",
                    )
                });
                (provider, result)
            })
            .collect();

        debug!(
            "Heartbeats collected: {}/{} reachable",
            heartbeats.values().filter(|r| r.is_reachable()).count(),
            heartbeats.len()
        );

        heartbeats
    }
}
