//! Domain-specific configuration modules

pub mod http;
pub mod logging;
pub mod server;
pub mod sync;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VizualConfig {
    /// HTTP client configuration for heartbeat probes
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,

    /// Server configuration
    #[serde(default)]
    pub server: server::ServerConfig,

    /// Sync status and provider configuration
    #[serde(default)]
    pub sync: sync::SyncConfig,
}

impl VizualConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.http.validate()?;
        self.logging.validate()?;
        self.server.validate()?;
        self.sync.validate()?;
        Ok(())
    }
}
