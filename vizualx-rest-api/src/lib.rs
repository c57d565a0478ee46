//! # Vizual X REST API
//!
//! Read-only HTTP facade over the sync service: the last-known sync status,
//! provider heartbeats and the combined overview, served under `/api/sync`.
//!
//! Handlers receive a [`SyncContext`] and never hold mutable state. Internal
//! faults answer 500 with a flat `{error, code}` body; details only reach
//! the logs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vizualx_config::VizualConfig;
//! use vizualx_rest_api::{create_rest_app, AppConfig, SyncContext};
//! use vizualx_sync::SyncService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VizualConfig::default();
//! let service = SyncService::from_config(&config.sync, config.http.clone().into())?;
//!
//! let app = create_rest_app(
//!     SyncContext::new(Arc::new(service)),
//!     AppConfig::from(&config.server),
//! );
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;

// Re-export commonly used types
pub use app::{create_rest_app, AppConfig};
pub use context::SyncContext;
pub use errors::{RestError, RestResult};
pub use models::*;
