//! Configuration loading and environment variable handling

use crate::domains::sync::ProviderConfig;
use crate::domains::VizualConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "VIZUALX".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML or JSON file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<VizualConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let mut config: VizualConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<VizualConfig> {
        let mut config = VizualConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<VizualConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut VizualConfig) -> ConfigResult<()> {
        self.apply_http_overrides(&mut config.http)?;
        self.apply_logging_overrides(&mut config.logging)?;
        self.apply_server_overrides(&mut config.server)?;
        self.apply_sync_overrides(&mut config.sync)?;
        Ok(())
    }

    /// Apply HTTP config overrides
    fn apply_http_overrides(
        &self,
        config: &mut crate::domains::http::HttpConfig,
    ) -> ConfigResult<()> {
        if let Ok(timeout) = self.get_env_var("HTTP_TIMEOUT") {
            let seconds: u64 = self.parse_env("HTTP_TIMEOUT", &timeout)?;
            config.timeout = Duration::from_secs(seconds);
        }

        if let Ok(user_agent) = self.get_env_var("HTTP_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(verify_ssl) = self.get_env_var("HTTP_VERIFY_SSL") {
            config.verify_ssl = self.parse_env("HTTP_VERIFY_SSL", &verify_ssl)?;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    /// Apply server config overrides
    fn apply_server_overrides(
        &self,
        config: &mut crate::domains::server::ServerConfig,
    ) -> ConfigResult<()> {
        if let Ok(bind) = self.get_env_var("SERVER_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(port) = self.get_env_var("SERVER_PORT") {
            config.port = self.parse_env("SERVER_PORT", &port)?;
        }

        Ok(())
    }

    /// Apply sync config overrides, including per-provider endpoints and tokens
    fn apply_sync_overrides(
        &self,
        config: &mut crate::domains::sync::SyncConfig,
    ) -> ConfigResult<()> {
        if let Ok(path) = self.get_env_var("SYNC_STATUS_PATH") {
            config.status_path = path.into();
        }

        if let Ok(window) = self.get_env_var("SYNC_FRESHNESS_SECONDS") {
            let seconds: u64 = self.parse_env("SYNC_FRESHNESS_SECONDS", &window)?;
            config.freshness_window = Duration::from_secs(seconds);
        }

        self.apply_provider_overrides("GITHUB", &mut config.providers.github)?;
        self.apply_provider_overrides("CLOUD", &mut config.providers.cloud)?;
        self.apply_provider_overrides("CDN", &mut config.providers.cdn)?;

        Ok(())
    }

    fn apply_provider_overrides(&self, key: &str, config: &mut ProviderConfig) -> ConfigResult<()> {
        if let Ok(base_url) = self.get_env_var(&format!("{}_BASE_URL", key)) {
            config.base_url = Some(base_url);
        }

        if let Ok(token) = self.get_env_var(&format!("{}_TOKEN", key)) {
            if !token.trim().is_empty() {
                config.auth_token = Some(token);
            }
        }

        let enabled_var = format!("{}_ENABLED", key);
        if let Ok(enabled) = self.get_env_var(&enabled_var) {
            config.enabled = self.parse_env(&enabled_var, &enabled)?;
        }

        Ok(())
    }

    fn parse_env<T>(&self, name: &str, value: &str) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        value
            .trim()
            .parse()
            .map_err(|e| ConfigError::EnvError(format!("Invalid {}: {}", name, e)))
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
