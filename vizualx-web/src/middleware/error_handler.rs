use axum::{
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::errors::WebError;

/// Logs every 5xx response leaving the router
pub async fn error_handler_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        error!(%method, %path, "Request failed with {}", status);
    } else if status == StatusCode::NOT_FOUND {
        warn!(%method, %path, "Not found");
    }

    response
}

/// Router fallback for unknown routes
pub async fn handle_not_found() -> impl IntoResponse {
    WebError::not_found("Not found", "The requested resource was not found")
}

/// Handle method not allowed
pub async fn handle_method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed", "code": "METHOD_NOT_ALLOWED" })),
    )
}
