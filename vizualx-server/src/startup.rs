//! Server startup and shutdown logic

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use vizualx_config::VizualConfig;
use vizualx_rest_api::{create_rest_app, AppConfig, SyncContext};
use vizualx_sync::SyncService;

/// Server application struct
pub struct Server {
    config: VizualConfig,
    service: Arc<SyncService>,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: VizualConfig) -> Result<Self> {
        let service = SyncService::from_config(&config.sync, config.http.clone().into())
            .context("Failed to create sync service")?;

        Ok(Self {
            config,
            service: Arc::new(service),
        })
    }

    pub fn service(&self) -> Arc<SyncService> {
        Arc::clone(&self.service)
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        create_rest_app(
            SyncContext::new(self.service()),
            AppConfig::from(&self.config.server),
        )
    }

    /// Start the server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<()> {
        let addr = self.config.server.socket_addr()?;
        let app = self.build_app();

        self.log_config_summary();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Log configuration summary
    fn log_config_summary(&self) {
        let server = &self.config.server;
        let sync = &self.config.sync;

        tracing::info!("=== Vizual X Sync Server Configuration ===");
        tracing::info!("Bind Address: {}:{}", server.bind_address, server.port);
        tracing::info!("Status Artifact: {}", sync.status_path.display());
        tracing::info!("Freshness Window: {}s", sync.freshness_window.as_secs());
        tracing::info!("Probe Timeout: {}ms", self.config.http.timeout.as_millis());
        for (name, provider) in [
            ("github", &sync.providers.github),
            ("cloud", &sync.providers.cloud),
            ("cdn", &sync.providers.cdn),
        ] {
            tracing::info!(
                "Provider {}: {}",
                name,
                provider.probe_url().as_deref().unwrap_or("not configured")
            );
        }
        tracing::info!("CORS: {}", if server.enable_cors { "Enabled" } else { "Disabled" });
        tracing::info!("Request ID: {}", if server.enable_request_id { "Enabled" } else { "Disabled" });
        tracing::info!("Tracing: {}", if server.enable_tracing { "Enabled" } else { "Disabled" });
        tracing::info!("==========================================");
    }
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
