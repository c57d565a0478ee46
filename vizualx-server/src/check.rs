//! One-shot heartbeat check for scripts and cron jobs

use anyhow::Result;
use serde_json::Value;
use vizualx_sync::{Provider, SyncService};

/// Outcome of a one-shot check
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// JSON document printed to stdout
    pub body: Value,
    /// Whether every probed provider answered
    pub all_reachable: bool,
}

/// Probe one provider, or build the full overview when `provider` is `None`
pub async fn run_check(service: &SyncService, provider: Option<Provider>) -> Result<CheckReport> {
    let report = match provider {
        Some(provider) => {
            let result = service.check_heartbeat(provider).await;
            CheckReport {
                all_reachable: result.is_reachable(),
                body: serde_json::to_value(&result)?,
            }
        }
        None => {
            let overview = service.get_sync_overview().await;
            CheckReport {
                all_reachable: overview.all_reachable(),
                body: serde_json::to_value(&overview)?,
            }
        }
    };

    tracing::debug!("Check finished, all reachable: {}", report.all_reachable);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use vizualx_sync::{HeartbeatProbe, HeartbeatResult, SyncStatusReader};

    struct CdnOnlyProbe;

    #[async_trait::async_trait]
    impl HeartbeatProbe for CdnOnlyProbe {
        async fn check_heartbeat(&self, provider: Provider) -> HeartbeatResult {
            match provider {
                Provider::Cdn => HeartbeatResult::reachable(provider, 7),
                _ => HeartbeatResult::not_configured(provider),
            }
        }
    }

    fn service() -> SyncService {
        SyncService::new(
            Arc::new(CdnOnlyProbe),
            SyncStatusReader::from_file("/nonexistent/sync-status.json", Duration::from_secs(300)),
        )
    }

    #[tokio::test]
    async fn test_single_provider_check() {
        let report = run_check(&service(), Some(Provider::Cdn)).await.unwrap();
        assert!(report.all_reachable);
        assert_eq!(report.body["provider"], "cdn");
    }

    #[tokio::test]
    async fn test_overview_check_fails_when_any_unreachable() {
        let report = run_check(&service(), None).await.unwrap();
        assert!(!report.all_reachable);
        assert!(report.body["status"].is_null());
        assert_eq!(report.body["heartbeats"]["github"]["errorKind"], "NotConfigured");
    }
}
