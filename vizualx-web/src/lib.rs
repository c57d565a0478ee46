//! # Vizual X Web Utilities
//!
//! Reusable axum plumbing for the Vizual X HTTP APIs: flat JSON error
//! responses, CORS, request ids and error logging.
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use vizualx_web::middleware::{cors_layer, error_handler_middleware, request_id_middleware};
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let app: Router = Router::new()
//!     .route("/ping", get(|| async { "pong" }))
//!     .layer(middleware::from_fn(error_handler_middleware))
//!     .layer(middleware::from_fn(request_id_middleware))
//!     .layer(cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3001").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

pub mod errors;
pub mod middleware;

// Re-export commonly used types and functions
pub use errors::{WebError, WebResult};
pub use middleware::{
    cors_layer, cors_layer_with_config, error_handler_middleware, handle_method_not_allowed,
    handle_not_found, request_id_middleware, CorsConfig, RequestId,
};
