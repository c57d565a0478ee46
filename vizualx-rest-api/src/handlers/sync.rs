//! Sync status and heartbeat endpoints

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};
use vizualx_sync::Provider;

use crate::{
    context::SyncContext,
    errors::{RestError, RestResult},
    models::SyncStatusResponse,
};

/// Latest sync status with its freshness flag
///
/// 404 when the sync script has not written an artifact yet.
pub async fn get_sync_status(State(ctx): State<SyncContext>) -> RestResult<impl IntoResponse> {
    debug!("Sync status requested");

    let (status, fresh) = ctx
        .sync
        .get_sync_status_with_freshness()
        .await
        .map_err(RestError::sync("Failed to retrieve sync status"))?
        .ok_or(RestError::NoSyncStatus)?;

    Ok(Json(SyncStatusResponse { status, fresh }))
}

/// Per-component view of the latest sync status
pub async fn get_sync_components(State(ctx): State<SyncContext>) -> RestResult<impl IntoResponse> {
    let components = ctx
        .sync
        .get_sync_components()
        .await
        .map_err(RestError::sync("Failed to retrieve sync components"))?
        .ok_or(RestError::NoSyncStatus)?;

    Ok(Json(components))
}

/// Heartbeats for every provider; always 200
pub async fn get_all_heartbeats(State(ctx): State<SyncContext>) -> impl IntoResponse {
    let snapshot = ctx.sync.get_all_heartbeats().await;

    info!(
        "Heartbeat check: {} of {} providers reachable",
        snapshot.heartbeats.values().filter(|r| r.is_reachable()).count(),
        snapshot.heartbeats.len()
    );

    Json(snapshot)
}

/// Heartbeat for a single provider, accepting `gcp` and `cloudflare` aliases
pub async fn get_provider_heartbeat(
    State(ctx): State<SyncContext>,
    Path(provider): Path<String>,
) -> RestResult<impl IntoResponse> {
    let provider: Provider = provider.parse()?;

    Ok(Json(ctx.sync.check_heartbeat(provider).await))
}

/// Status and heartbeats combined; always 200
pub async fn get_sync_overview(State(ctx): State<SyncContext>) -> impl IntoResponse {
    Json(ctx.sync.get_sync_overview().await)
}
