//! Main application configuration and router setup

use axum::{
    handler::Handler,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;
use vizualx_config::ServerConfig;
use vizualx_web::middleware::{
    cors_layer_with_config, error_handler_middleware, handle_method_not_allowed, handle_not_found,
    request_id_middleware, CorsConfig,
};

use crate::{context::SyncContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// Origins allowed by CORS
    pub cors_allowed_origins: Vec<String>,
    /// API path prefix
    pub api_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
            cors_allowed_origins: CorsConfig::default().allowed_origins,
            api_prefix: "/api".to_string(),
        }
    }
}

impl From<&ServerConfig> for AppConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            enable_cors: server.enable_cors,
            enable_request_id: server.enable_request_id,
            enable_tracing: server.enable_tracing,
            cors_allowed_origins: server.cors_allowed_origins.clone(),
            ..Default::default()
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(context: SyncContext, config: AppConfig) -> Router {
    let app = Router::new()
        .route("/", read_only(handlers::service_info))
        .nest(&config.api_prefix, create_api_router())
        .fallback(handle_not_found)
        .with_state(context);

    // Add middleware layers (applied in reverse order)
    let mut app = app.layer(middleware::from_fn(error_handler_middleware));

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    if config.enable_request_id {
        app = app.layer(middleware::from_fn(request_id_middleware));
    }

    if config.enable_cors {
        app = app.layer(cors_layer_with_config(CorsConfig::with_origins(
            config.cors_allowed_origins,
        )));
    }

    app
}

/// Create unified API router
fn create_api_router() -> Router<SyncContext> {
    Router::new()
        .route("/health", read_only(handlers::health_check))
        .route("/sync/status", read_only(handlers::get_sync_status))
        .route("/sync/components", read_only(handlers::get_sync_components))
        .route("/sync/heartbeat", read_only(handlers::get_all_heartbeats))
        .route("/sync/heartbeat/{provider}", read_only(handlers::get_provider_heartbeat))
        .route("/sync/overview", read_only(handlers::get_sync_overview))
}

/// GET route; any other method gets the JSON 405 body
fn read_only<H, T>(handler: H) -> MethodRouter<SyncContext>
where
    H: Handler<T, SyncContext>,
    T: 'static,
{
    get(handler).fallback(handle_method_not_allowed)
}
