//! Domain-driven configuration management for the Vizual X sync service
//!
//! Configuration is split by functional domain (HTTP client, logging,
//! server, sync providers), each with defaults, validation and
//! `VIZUALX_*` environment variable overrides.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    http::HttpConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    server::ServerConfig,
    sync::{ProviderConfig, ProvidersConfig, SyncConfig},
    VizualConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
