//! Order API (`/order`)

use axum::extract::State;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use shared::error::{AppError, AppResult, ErrorBody};
use shared::models::{Order, OrderCreate, OrderDetails, OrderStatusUpdate, PendingOrder};

use super::extract::{JsonBody, PathId};
use super::no_rows;
use crate::state::AppState;

type NoRows = Json<Vec<serde_json::Value>>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/pending", get(list_pending_orders))
        .route("/done", get(list_done_orders))
        .route("/details/{id}", get(get_order_details))
        .route("/status/{id}", put(update_order_status))
        .route("/{id}", delete(delete_order))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/order",
    tag = "order",
    responses((status = 200, body = [Order]), (status = 500, body = ErrorBody))
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.db.list_orders().await?))
}

/// In-progress orders (without the status column)
#[utoipa::path(
    get,
    path = "/order/pending",
    tag = "order",
    responses((status = 200, body = [PendingOrder]), (status = 500, body = ErrorBody))
)]
pub async fn list_pending_orders(State(state): State<AppState>) -> AppResult<Json<Vec<PendingOrder>>> {
    Ok(Json(state.db.list_pending_orders().await?))
}

/// Orders no longer in progress
#[utoipa::path(
    get,
    path = "/order/done",
    tag = "order",
    responses((status = 200, body = [Order]), (status = 500, body = ErrorBody))
)]
pub async fn list_done_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.db.list_done_orders().await?))
}

/// One order with its line items
///
/// The order and its lines are read by two separate statements.
#[utoipa::path(
    get,
    path = "/order/details/{id}",
    tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, body = OrderDetails),
        (status = 404, description = "No order has the given id", body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn get_order_details(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> AppResult<Json<OrderDetails>> {
    let order = state.db.find_order(id).await?;
    let details = state.db.list_order_lines(id).await?;

    let order = order.ok_or_else(AppError::order_not_found)?;
    Ok(Json(OrderDetails { order, details }))
}

/// Create an in-progress order
#[utoipa::path(
    post,
    path = "/order",
    tag = "order",
    request_body = OrderCreate,
    responses((status = 200, description = "Empty array"), (status = 500, body = ErrorBody))
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<OrderCreate>,
) -> AppResult<NoRows> {
    state.db.create_order(&data).await?;
    tracing::info!(customer_id = ?data.customer_id, "Order created");
    Ok(no_rows())
}

/// Overwrite an order's status
#[utoipa::path(
    put,
    path = "/order/status/{id}",
    tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderStatusUpdate,
    responses((status = 200, description = "Empty array"), (status = 500, body = ErrorBody))
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
    JsonBody(data): JsonBody<OrderStatusUpdate>,
) -> AppResult<NoRows> {
    state.db.update_order_status(id, data.status.as_deref()).await?;
    Ok(no_rows())
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/order/{id}",
    tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    responses((status = 200, description = "Empty array"), (status = 500, body = ErrorBody))
)]
pub async fn delete_order(State(state): State<AppState>, PathId(id): PathId<i32>) -> AppResult<NoRows> {
    state.db.delete_order(id).await?;
    Ok(no_rows())
}
