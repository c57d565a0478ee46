//! Provider, heartbeat and sync status types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// External providers probed for liveness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Github,
    Cloud,
    Cdn,
}

impl Provider {
    /// Every known provider, in reporting order
    pub const ALL: [Provider; 3] = [Provider::Github, Provider::Cloud, Provider::Cdn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Github => "github",
            Provider::Cloud => "cloud",
            Provider::Cdn => "cdn",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(Provider::Github),
            "cloud" | "gcp" => Ok(Provider::Cloud),
            "cdn" | "cloudflare" => Ok(Provider::Cdn),
            _ => Err(ProviderParseError::Unknown(s.to_string())),
        }
    }
}

/// Errors that can occur when parsing provider names
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderParseError {
    #[error("Unknown provider '{0}'. Known providers are: github, cloud (gcp), cdn (cloudflare)")]
    Unknown(String),
}

/// Why a heartbeat probe did not reach its provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No response within the probe timeout
    Timeout,
    /// Connection-level failure (DNS, refused, TLS)
    Unreachable,
    /// Non-2xx status or malformed body
    BadResponse,
    /// Provider disabled or missing its endpoint configuration
    NotConfigured,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Timeout => "Timeout",
            ErrorKind::Unreachable => "Unreachable",
            ErrorKind::BadResponse => "BadResponse",
            ErrorKind::NotConfigured => "NotConfigured",
        };
        f.write_str(name)
    }
}

/// Outcome of a single heartbeat probe.
///
/// Fields are private so that an unreachable result always carries an
/// error kind and a reachable one always carries a latency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResult {
    provider: Provider,
    reachable: bool,
    latency_ms: Option<u64>,
    checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl HeartbeatResult {
    /// Successful probe; latency is clamped to at least 1 ms
    pub fn reachable(provider: Provider, latency_ms: u64) -> Self {
        Self {
            provider,
            reachable: true,
            latency_ms: Some(latency_ms.max(1)),
            checked_at: Utc::now(),
            error_kind: None,
            message: None,
        }
    }

    /// Failed probe
    pub fn unreachable(provider: Provider, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            reachable: false,
            latency_ms: None,
            checked_at: Utc::now(),
            error_kind: Some(kind),
            message: Some(message.into()),
        }
    }

    pub fn not_configured(provider: Provider) -> Self {
        Self::unreachable(provider, ErrorKind::NotConfigured, "provider not configured")
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    pub fn latency_ms(&self) -> Option<u64> {
        self.latency_ms
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Last-known sync status written by the external sync script.
///
/// Everything besides `generatedAt` and `source` is kept as an opaque
/// payload and flattened back into the same JSON object on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub source: String,
    #[serde(flatten)]
    pub payload: Map<String, JsonValue>,
}

/// Heartbeats for every known provider at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct HeartbeatSnapshot {
    pub timestamp: DateTime<Utc>,
    pub heartbeats: BTreeMap<Provider, HeartbeatResult>,
}

impl HeartbeatSnapshot {
    pub fn all_reachable(&self) -> bool {
        self.heartbeats.values().all(HeartbeatResult::is_reachable)
    }
}

/// Combined sync status and provider heartbeats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOverview {
    pub status: Option<SyncStatus>,
    pub status_fresh: bool,
    pub heartbeats: BTreeMap<Provider, HeartbeatResult>,
    pub generated_at: DateTime<Utc>,
}

impl SyncOverview {
    pub fn all_reachable(&self) -> bool {
        self.heartbeats.values().all(HeartbeatResult::is_reachable)
    }
}
