//! Stock API (`/stock`): inventory and available dishes

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::error::{AppResult, ErrorBody};
use shared::models::{Dish, InventoryCreate, InventoryItem, QuantityUpdate};

use super::extract::{JsonBody, PathId};
use super::no_rows;
use crate::state::AppState;

type NoRows = Json<Vec<serde_json::Value>>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory).post(create_inventory_item))
        .route("/restock", get(list_restock))
        .route("/dish", get(list_available_dishes))
        .route("/{id}", put(update_quantity).delete(delete_inventory_item))
}

/// List all inventory rows
#[utoipa::path(
    get,
    path = "/stock",
    tag = "stock",
    responses((status = 200, body = [InventoryItem]), (status = 500, body = ErrorBody))
)]
pub async fn list_inventory(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.db.list_inventory().await?))
}

/// Items whose quantity is strictly below their critical threshold
#[utoipa::path(
    get,
    path = "/stock/restock",
    tag = "stock",
    responses((status = 200, body = [InventoryItem]), (status = 500, body = ErrorBody))
)]
pub async fn list_restock(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.db.list_restock().await?))
}

/// Dishes currently on the menu
#[utoipa::path(
    get,
    path = "/stock/dish",
    tag = "stock",
    responses((status = 200, body = [Dish]), (status = 500, body = ErrorBody))
)]
pub async fn list_available_dishes(State(state): State<AppState>) -> AppResult<Json<Vec<Dish>>> {
    Ok(Json(state.db.list_available_dishes().await?))
}

/// Replace an item's available quantity
#[utoipa::path(
    put,
    path = "/stock/{id}",
    tag = "stock",
    params(("id" = i32, Path, description = "Inventory item id")),
    request_body = QuantityUpdate,
    responses((status = 200, description = "Empty array"), (status = 500, body = ErrorBody))
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
    JsonBody(data): JsonBody<QuantityUpdate>,
) -> AppResult<NoRows> {
    state.db.update_quantity(id, data.quantity).await?;
    Ok(no_rows())
}

/// Add an inventory item
#[utoipa::path(
    post,
    path = "/stock",
    tag = "stock",
    request_body = InventoryCreate,
    responses((status = 200, description = "Empty array"), (status = 500, body = ErrorBody))
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<InventoryCreate>,
) -> AppResult<NoRows> {
    state.db.create_inventory_item(&data).await?;
    Ok(no_rows())
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/stock/{id}",
    tag = "stock",
    params(("id" = i32, Path, description = "Inventory item id")),
    responses((status = 200, description = "Empty array"), (status = 500, body = ErrorBody))
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> AppResult<NoRows> {
    state.db.delete_inventory_item(id).await?;
    Ok(no_rows())
}
