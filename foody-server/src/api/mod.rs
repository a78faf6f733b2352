//! HTTP API
//!
//! `/customer`, `/order` and `/stock` routers plus the service routes
//! (welcome, health, OpenAPI document).

use axum::Router;
use axum::Json;
use axum::middleware as axum_middleware;
use axum::routing::get;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

pub mod customer;
pub mod docs;
pub mod extract;
pub mod health;
pub mod order;
pub mod stock;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Body of write endpoints: the (empty) row set of the statement
pub(crate) fn no_rows() -> Json<Vec<serde_json::Value>> {
    Json(Vec::new())
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .merge(docs::swagger_ui())
        .nest("/customer", customer::router())
        .nest("/order", order::router())
        .nest("/stock", stock::router())
}

/// Build the application: routes, middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router()
        // CORS - any origin
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Set is outermost: generated ids are echoed back as well
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
