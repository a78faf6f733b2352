//! Database gateway
//!
//! One method per SQL statement, grouped by table family. Every statement
//! binds its inputs positionally. Handlers only see the [`Gateway`] trait
//! object; [`PgGateway`] is the PostgreSQL implementation.

mod customer;
mod order;
mod stock;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{
    Customer, CustomerCreate, Dish, InventoryCreate, InventoryItem, Order, OrderCreate, OrderLine,
    PendingOrder, RankedCustomer,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// `Clients` statements
#[async_trait]
pub trait CustomerGateway: Send + Sync {
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Customers ranked by the sum of their paid orders, listed by rank descending
    async fn top_customers(&self) -> AppResult<Vec<RankedCustomer>>;

    /// Insert with zero loyalty points, returning the inserted row
    async fn create_customer(&self, data: &CustomerCreate) -> AppResult<Vec<Customer>>;

    /// Delete by id; deleting nothing is not an error
    async fn delete_customer(&self, id: i32) -> AppResult<()>;
}

/// `Commandes` / `Details_Commande` statements
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn list_orders(&self) -> AppResult<Vec<Order>>;
    async fn list_pending_orders(&self) -> AppResult<Vec<PendingOrder>>;
    async fn list_done_orders(&self) -> AppResult<Vec<Order>>;
    async fn find_order(&self, id: i32) -> AppResult<Option<Order>>;

    /// Line items of an order joined with their dish
    async fn list_order_lines(&self, order_id: i32) -> AppResult<Vec<OrderLine>>;

    /// Insert as in-progress, timestamped by the store
    async fn create_order(&self, data: &OrderCreate) -> AppResult<()>;
    async fn update_order_status(&self, id: i32, status: Option<&str>) -> AppResult<()>;
    async fn delete_order(&self, id: i32) -> AppResult<()>;
}

/// `Inventaire` / `Menus` statements
#[async_trait]
pub trait StockGateway: Send + Sync {
    async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>>;

    /// Items whose quantity is strictly below their critical threshold
    async fn list_restock(&self) -> AppResult<Vec<InventoryItem>>;
    async fn list_available_dishes(&self) -> AppResult<Vec<Dish>>;

    /// Overwrite the available quantity
    async fn update_quantity(&self, id: i32, quantity: Option<i32>) -> AppResult<()>;
    async fn create_inventory_item(&self, data: &InventoryCreate) -> AppResult<()>;
    async fn delete_inventory_item(&self, id: i32) -> AppResult<()>;
}

/// Everything the API needs from the store
pub trait Gateway: CustomerGateway + OrderGateway + StockGateway {}

impl<T> Gateway for T where T: CustomerGateway + OrderGateway + StockGateway {}

/// PostgreSQL gateway over a shared connection pool
#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool (connects eagerly so a bad URL fails at startup)
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
