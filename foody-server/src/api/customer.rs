//! Customer API (`/customer`)

use axum::extract::State;
use axum::routing::{delete, get};
use axum::{Json, Router};
use shared::error::{AppResult, ErrorBody};
use shared::models::{Customer, CustomerCreate, RankedCustomer};

use super::extract::{JsonBody, PathId};
use super::no_rows;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/top", get(top_customers))
        .route("/{id}", delete(delete_customer))
}

/// List all customers
#[utoipa::path(
    get,
    path = "/customer",
    tag = "customer",
    responses(
        (status = 200, body = [Customer]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.db.list_customers().await?))
}

/// Customers ranked by the total of their paid orders
#[utoipa::path(
    get,
    path = "/customer/top",
    tag = "customer",
    responses(
        (status = 200, body = [RankedCustomer]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn top_customers(State(state): State<AppState>) -> AppResult<Json<Vec<RankedCustomer>>> {
    Ok(Json(state.db.top_customers().await?))
}

/// Create a customer with zero loyalty points
#[utoipa::path(
    post,
    path = "/customer",
    tag = "customer",
    request_body = CustomerCreate,
    responses(
        (status = 200, description = "Inserted row", body = [Customer]),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CustomerCreate>,
) -> AppResult<Json<Vec<Customer>>> {
    let rows = state.db.create_customer(&data).await?;
    tracing::info!(count = rows.len(), "Customer created");
    Ok(Json(rows))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Empty array"),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> AppResult<Json<Vec<serde_json::Value>>> {
    state.db.delete_customer(id).await?;
    Ok(no_rows())
}
