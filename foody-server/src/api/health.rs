//! Service routes

use axum::Json;
use serde_json::{Value, json};

/// Welcome message
#[utoipa::path(get, path = "/", tag = "service", responses((status = 200, description = "Welcome message")))]
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to Foody API" }))
}

/// Health check
#[utoipa::path(get, path = "/health", tag = "service", responses((status = 200, description = "Service is up")))]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "foody-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
