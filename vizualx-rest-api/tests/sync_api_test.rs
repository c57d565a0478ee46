//! Sync endpoints exercised through the full router

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;
use vizualx_rest_api::{create_rest_app, AppConfig, SyncContext};
use vizualx_sync::{ErrorKind, HeartbeatProbe, HeartbeatResult, Provider, SyncService, SyncStatusReader};

/// GitHub times out; every other provider answers in 12 ms
struct GithubDownProbe;

#[async_trait::async_trait]
impl HeartbeatProbe for GithubDownProbe {
    async fn check_heartbeat(&self, provider: Provider) -> HeartbeatResult {
        match provider {
            Provider::Github => HeartbeatResult::unreachable(
                provider,
                ErrorKind::Timeout,
                "timed out after 5000ms",
            ),
            _ => HeartbeatResult::reachable(provider, 12),
        }
    }
}

struct AllUpProbe;

#[async_trait::async_trait]
impl HeartbeatProbe for AllUpProbe {
    async fn check_heartbeat(&self, provider: Provider) -> HeartbeatResult {
        HeartbeatResult::reachable(provider, 42)
    }
}

fn app(probe: impl HeartbeatProbe + 'static, status_path: PathBuf) -> Router {
    let service = SyncService::new(
        Arc::new(probe),
        SyncStatusReader::from_file(status_path, Duration::from_secs(300)),
    );
    create_rest_app(SyncContext::new(Arc::new(service)), AppConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn write_status(dir: &TempDir, body: Value) -> PathBuf {
    let path = dir.path().join("sync-status.json");
    std::fs::write(&path, body.to_string()).unwrap();
    path
}

#[tokio::test]
async fn test_missing_status_returns_404() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/status").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No sync status available");
    assert!(body["message"].is_string());

    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/components").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No sync status available");
}

#[tokio::test]
async fn test_status_includes_fresh_flag() {
    let dir = TempDir::new().unwrap();
    let path = write_status(
        &dir,
        json!({
            "generatedAt": Utc::now().to_rfc3339(),
            "source": "infinity-sync",
            "git": { "status": "synced" },
            "error": "stale field from a previous run"
        }),
    );

    let (status, body) = get(app(AllUpProbe, path), "/api/sync/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fresh"], true);
    assert_eq!(body["source"], "infinity-sync");
    assert_eq!(body["git"]["status"], "synced");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_malformed_status_returns_sanitized_500() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sync-status.json");
    std::fs::write(&path, "{ truncated").unwrap();

    let (status, body) = get(app(AllUpProbe, path.clone()), "/api/sync/status").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to retrieve sync status");
    assert_eq!(body["code"], "STATUS_MALFORMED");
    assert!(!body.to_string().contains(&*path.to_string_lossy()));

    // Overview still answers with the status degraded
    let (status, body) = get(app(AllUpProbe, path), "/api/sync/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["status"].is_null());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_overview_with_github_timeout() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(app(GithubDownProbe, dir.path().join("none.json")), "/api/sync/overview").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["status"].is_null());
    assert_eq!(body["statusFresh"], false);
    assert_eq!(body["heartbeats"]["github"]["reachable"], false);
    assert_eq!(body["heartbeats"]["github"]["errorKind"], "Timeout");
    assert_eq!(body["heartbeats"]["cloud"]["reachable"], true);
    assert_eq!(body["heartbeats"]["cdn"]["reachable"], true);

    let keys: Vec<&String> = body["heartbeats"].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
}

#[tokio::test]
async fn test_heartbeat_all_always_200() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(app(GithubDownProbe, dir.path().join("none.json")), "/api/sync/heartbeat").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["timestamp"].is_string());
    for key in ["github", "cloud", "cdn"] {
        assert_eq!(body["heartbeats"][key]["provider"], key);
    }
}

#[tokio::test]
async fn test_single_provider_heartbeat() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/heartbeat/github").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reachable"], true);
    assert!(body["latencyMs"].as_u64().unwrap() > 0);
    assert!(body.get("errorKind").is_none());
}

#[tokio::test]
async fn test_provider_aliases() {
    let dir = TempDir::new().unwrap();

    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/heartbeat/gcp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "cloud");

    let (_, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/heartbeat/cloudflare").await;
    assert_eq!(body["provider"], "cdn");
}

#[tokio::test]
async fn test_unknown_provider_returns_404() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/heartbeat/azure").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown provider");
    assert!(body["message"].as_str().unwrap().contains("azure"));
}

#[tokio::test]
async fn test_components_view() {
    let dir = TempDir::new().unwrap();
    let path = write_status(
        &dir,
        json!({
            "timestamp": Utc::now().to_rfc3339(),
            "git": { "status": "synced", "lastSync": "2026-10-19T11:58:00Z", "message": "ok" }
        }),
    );

    let (status, body) = get(app(AllUpProbe, path), "/api/sync/components").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fresh"], true);
    assert_eq!(body["components"]["git"]["status"], "synced");
    assert_eq!(body["components"]["docker"]["status"], "unknown");
    assert_eq!(body["components"]["docker"]["message"], "Not yet synced");
}

#[tokio::test]
async fn test_health_and_banner() {
    let dir = TempDir::new().unwrap();

    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");

    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert!(body["endpoints"].as_array().unwrap().len() >= 5);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(app(AllUpProbe, dir.path().join("none.json")), "/api/sync/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_write_methods_return_json_405() {
    let dir = TempDir::new().unwrap();
    let app = app(AllUpProbe, write_status(&dir, json!({ "generatedAt": Utc::now().to_rfc3339() })));

    for (method, uri) in [("POST", "/api/sync/status"), ("DELETE", "/api/sync/heartbeat/github"), ("PUT", "/")] {
        let response = app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    }

    // The artifact is untouched
    let (status, body) = get(app, "/api/sync/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fresh"], true);
}
