//! Health check and banner endpoints

use axum::{response::IntoResponse, Json};
use tracing::debug;

use crate::models::common::{HealthResponse, ServiceInfo};

/// Routes listed by the service banner
pub const ENDPOINTS: [&str; 7] = [
    "GET /api/health",
    "GET /api/sync/status",
    "GET /api/sync/components",
    "GET /api/sync/heartbeat",
    "GET /api/sync/heartbeat/{provider}",
    "GET /api/sync/overview",
    "GET /",
];

/// Liveness check; never touches the providers
pub async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");

    Json(HealthResponse::ok())
}

pub async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo::running(&ENDPOINTS))
}
