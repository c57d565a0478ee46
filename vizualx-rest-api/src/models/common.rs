//! Common types for REST API responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness response; no provider probes involved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Service banner served at `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

impl ServiceInfo {
    pub fn running(endpoints: &[&str]) -> Self {
        Self {
            service: "Vizual X Sync Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "running".to_string(),
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }
}
