//! Sync status and provider heartbeat configuration

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, validate_url, Validatable};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Sync status service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Path of the status artifact written by the external sync script
    #[serde(default = "default_status_path")]
    pub status_path: PathBuf,

    /// Maximum artifact age before it is considered stale
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_freshness_window"
    )]
    pub freshness_window: Duration,

    /// Heartbeat provider endpoints
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Endpoint configuration for every known provider
///
/// Each section in a config file is laid over that provider's built-in
/// endpoint, so a section that only sets `auth_token` keeps the default URL.
#[derive(Debug, Clone, Serialize)]
pub struct ProvidersConfig {
    pub github: ProviderConfig,
    pub cloud: ProviderConfig,
    pub cdn: ProviderConfig,
}

/// Health endpoint of a single provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderConfig {
    /// Whether the provider is probed at all
    pub enabled: bool,

    /// Scheme and host of the provider API, e.g. `https://api.github.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Path appended to `base_url` for the health probe
    pub health_path: String,

    /// Bearer token sent with the probe. Never serialized.
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,

    /// Whether a 2xx body must parse as JSON to count as reachable
    pub expect_json: bool,
}

/// Provider section as written in a config file; unset keys keep the default
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderOverlay {
    enabled: Option<bool>,
    base_url: Option<String>,
    health_path: Option<String>,
    auth_token: Option<String>,
    expect_json: Option<bool>,
}

impl ProviderOverlay {
    fn apply(self, config: &mut ProviderConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        if let Some(health_path) = self.health_path {
            config.health_path = health_path;
        }
        if let Some(token) = self.auth_token.filter(|t| !t.trim().is_empty()) {
            config.auth_token = Some(token);
        }
        if let Some(expect_json) = self.expect_json {
            config.expect_json = expect_json;
        }
    }
}

impl<'de> Deserialize<'de> for ProvidersConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Sections {
            github: Option<ProviderOverlay>,
            cloud: Option<ProviderOverlay>,
            cdn: Option<ProviderOverlay>,
        }

        let sections = Sections::deserialize(deserializer)?;
        let mut providers = ProvidersConfig::default();
        if let Some(github) = sections.github {
            github.apply(&mut providers.github);
        }
        if let Some(cloud) = sections.cloud {
            cloud.apply(&mut providers.cloud);
        }
        if let Some(cdn) = sections.cdn {
            cdn.apply(&mut providers.cdn);
        }
        Ok(providers)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            status_path: default_status_path(),
            freshness_window: default_freshness_window(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            github: ProviderConfig::endpoint("https://api.github.com", "/rate_limit"),
            cloud: ProviderConfig::endpoint("https://status.cloud.google.com", "/incidents.json"),
            cdn: ProviderConfig::endpoint("https://www.cloudflarestatus.com", "/api/v2/status.json"),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            health_path: default_health_path(),
            auth_token: None,
            expect_json: false,
        }
    }
}

impl ProviderConfig {
    /// A JSON health endpoint at `base_url` + `health_path`
    pub fn endpoint(base_url: impl Into<String>, health_path: impl Into<String>) -> Self {
        Self {
            enabled: true,
            base_url: Some(base_url.into()),
            health_path: health_path.into(),
            auth_token: None,
            expect_json: true,
        }
    }

    /// Full probe URL, or `None` when the provider is disabled or has no base URL
    pub fn probe_url(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let base = self.base_url.as_deref()?.trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(format!("{}{}", base, self.health_path))
    }
}

impl Validatable for SyncConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(
            &self.status_path.to_string_lossy(),
            "status_path",
            self.domain_name(),
        )?;
        validate_positive(
            self.freshness_window.as_millis(),
            "freshness_window",
            self.domain_name(),
        )?;
        self.providers.validate()
    }

    fn domain_name(&self) -> &'static str {
        "sync"
    }
}

impl Validatable for ProvidersConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.github.validate()?;
        self.cloud.validate()?;
        self.cdn.validate()
    }

    fn domain_name(&self) -> &'static str {
        "sync.providers"
    }
}

impl Validatable for ProviderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.health_path.starts_with('/') {
            return Err(self.validation_error(format!(
                "health_path must start with '/', got '{}'",
                self.health_path
            )));
        }

        if self.enabled {
            if let Some(ref url) = self.base_url {
                validate_url(url, "base_url", self.domain_name())?;
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "sync.provider"
    }
}

fn default_status_path() -> PathBuf {
    PathBuf::from("sync-status.json")
}

fn default_freshness_window() -> Duration {
    Duration::from_secs(5 * 60)
}

fn default_health_path() -> String {
    "/".to_string()
}
