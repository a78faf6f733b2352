//! Request logging middleware

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Log every request with its request id, method, matched path, status and latency
///
/// Server and client errors are logged at warn level.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    // Request ID from the header, generated when absent
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(%request_id, %method, %path, status, latency_ms, "Request completed with server error");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %path, status, latency_ms, "Request completed with client error");
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}
