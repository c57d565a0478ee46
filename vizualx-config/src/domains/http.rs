//! HTTP client configuration used by provider heartbeat probes

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-probe timeout
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_timeout"
    )]
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to verify SSL certificates
    #[serde(default = "crate::domains::utils::default_true")]
    pub verify_ssl: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            verify_ssl: true,
        }
    }
}

impl Validatable for HttpConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Sub-second timeouts are allowed, zero is not
        validate_positive(self.timeout.as_millis(), "timeout", self.domain_name())?;
        validate_required_string(&self.user_agent, "user_agent", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "http"
    }
}

// Default value functions
fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_max_redirects() -> u32 {
    5
}

fn default_user_agent() -> String {
    "VizualX-Sync/1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_redirects, 5);
        assert_eq!(config.user_agent, "VizualX-Sync/1.0");
        assert!(config.verify_ssl);
    }

    #[test]
    fn test_http_config_validation() {
        let mut config = HttpConfig::default();
        assert!(config.validate().is_ok());

        config.timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());

        config.timeout = Duration::from_millis(250);
        assert!(config.validate().is_ok());

        config = HttpConfig::default();
        config.user_agent = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sub_second_timeout_survives_yaml() {
        let config = HttpConfig {
            timeout: Duration::from_millis(250),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("timeout: 0.25"));

        let parsed: HttpConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.timeout, Duration::from_millis(250));
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_whole_second_timeout_stays_integer() {
        let yaml = serde_yaml::to_string(&HttpConfig::default()).unwrap();
        assert!(yaml.contains("timeout: 5\n"));

        assert!(serde_yaml::from_str::<HttpConfig>("timeout: -1.5").is_err());
    }
}
