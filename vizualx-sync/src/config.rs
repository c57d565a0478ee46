//! Heartbeat client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vizualx_config::HttpConfig as ConfigHttpConfig;

/// Heartbeat client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatConfig {
    /// Per-probe timeout covering connect, response and body
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_redirects: u32,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            max_redirects: 5,
            user_agent: "VizualX-Sync/1.0".to_string(),
            verify_ssl: true,
        }
    }
}

impl HeartbeatConfig {
    /// Override the probe timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<ConfigHttpConfig> for HeartbeatConfig {
    fn from(config: ConfigHttpConfig) -> Self {
        Self {
            timeout: config.timeout,
            max_redirects: config.max_redirects,
            user_agent: config.user_agent,
            verify_ssl: config.verify_ssl,
        }
    }
}
