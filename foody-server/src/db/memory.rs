//! In-memory gateway for router tests
//!
//! Mirrors the statements of [`PgGateway`](super::PgGateway) against plain
//! vectors, including the NOT NULL and foreign key failures the reference
//! schema would raise.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{
    Customer, CustomerCreate, Dish, InventoryCreate, InventoryItem, ORDER_STATUS_IN_PROGRESS,
    ORDER_STATUS_PAID, Order, OrderCreate, OrderLine, PendingOrder, RankedCustomer,
};

use super::{CustomerGateway, OrderGateway, StockGateway};

#[derive(Default)]
struct Tables {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    /// (id_commande, id_plat, quantite)
    lines: Vec<(i32, i32, i32)>,
    /// (dish, disponibilite)
    menus: Vec<(Dish, bool)>,
    inventory: Vec<InventoryItem>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryGateway {
    tables: Mutex<Tables>,
    unavailable: bool,
}

/// `quantite_disponible < seuil_critique`; a NULL on either side is not true
fn needs_restock(item: &InventoryItem) -> bool {
    matches!((item.quantity, item.threshold), (Some(q), Some(t)) if q < t)
}

fn not_null(column: &str, table: &str) -> AppError {
    AppError::database(format!(
        "null value in column \"{column}\" of relation \"{table}\" violates not-null constraint"
    ))
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every statement fails as if the store could not be reached
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.unavailable {
            return Err(AppError::database("connection refused"));
        }
        Ok(())
    }

    pub fn seed_customer(&self, last_name: &str, first_name: &str) -> i32 {
        let mut t = self.tables.lock();
        let id = t.next_id();
        t.customers.push(Customer {
            id,
            last_name: Some(last_name.into()),
            first_name: Some(first_name.into()),
            contact: None,
            loyalty_points: 0,
        });
        id
    }

    pub fn seed_order(&self, customer_id: i32, status: &str, total: Decimal) -> i32 {
        let mut t = self.tables.lock();
        let id = t.next_id();
        t.orders.push(Order {
            id,
            customer_id: Some(customer_id),
            employee_id: None,
            created_at: Some(Utc::now().naive_utc()),
            status: Some(status.into()),
            total: Some(total),
        });
        id
    }

    pub fn seed_dish(&self, name: &str, price: Decimal, available: bool) -> i32 {
        let mut t = self.tables.lock();
        let id = t.next_id();
        t.menus.push((
            Dish {
                id,
                name: Some(name.into()),
                description: None,
                price: Some(price),
            },
            available,
        ));
        id
    }

    pub fn seed_line(&self, order_id: i32, dish_id: i32, quantity: i32) {
        self.tables.lock().lines.push((order_id, dish_id, quantity));
    }

    pub fn seed_inventory(&self, name: &str, quantity: i32, threshold: i32) -> i32 {
        let mut t = self.tables.lock();
        let id = t.next_id();
        t.inventory.push(InventoryItem {
            id,
            name: Some(name.into()),
            quantity: Some(quantity),
            threshold: Some(threshold),
        });
        id
    }
}

#[async_trait]
impl CustomerGateway for MemoryGateway {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.check()?;
        Ok(self.tables.lock().customers.clone())
    }

    async fn top_customers(&self) -> AppResult<Vec<RankedCustomer>> {
        self.check()?;
        let t = self.tables.lock();
        let totals: Vec<(Customer, Decimal)> = t
            .customers
            .iter()
            .map(|c| {
                let paid: Decimal = t
                    .orders
                    .iter()
                    .filter(|o| o.customer_id == Some(c.id))
                    .filter(|o| o.status.as_deref() == Some(ORDER_STATUS_PAID))
                    .filter_map(|o| o.total)
                    .sum();
                (c.clone(), paid)
            })
            .collect();

        let mut ranked: Vec<RankedCustomer> = totals
            .iter()
            .map(|(customer, total)| RankedCustomer {
                customer: customer.clone(),
                rank: 1 + totals.iter().filter(|(_, other)| other > total).count() as i64,
            })
            .collect();
        ranked.sort_by_key(|r| Reverse(r.rank));
        Ok(ranked)
    }

    async fn create_customer(&self, data: &CustomerCreate) -> AppResult<Vec<Customer>> {
        self.check()?;
        let last_name = data.last_name.clone().ok_or_else(|| not_null("nom", "clients"))?;
        let first_name = data
            .first_name
            .clone()
            .ok_or_else(|| not_null("prenom", "clients"))?;

        let mut t = self.tables.lock();
        let customer = Customer {
            id: t.next_id(),
            last_name: Some(last_name),
            first_name: Some(first_name),
            contact: data.contact.clone(),
            loyalty_points: 0,
        };
        t.customers.push(customer.clone());
        Ok(vec![customer])
    }

    async fn delete_customer(&self, id: i32) -> AppResult<()> {
        self.check()?;
        let mut t = self.tables.lock();
        if t.orders.iter().any(|o| o.customer_id == Some(id)) {
            return Err(AppError::database(
                "update or delete on table \"clients\" violates foreign key constraint \
                 \"commandes_id_client_fkey\" on table \"commandes\"",
            ));
        }
        t.customers.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl OrderGateway for MemoryGateway {
    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.check()?;
        Ok(self.tables.lock().orders.clone())
    }

    async fn list_pending_orders(&self) -> AppResult<Vec<PendingOrder>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .orders
            .iter()
            .filter(|o| o.status.as_deref() == Some(ORDER_STATUS_IN_PROGRESS))
            .cloned()
            .map(PendingOrder::from)
            .collect())
    }

    async fn list_done_orders(&self) -> AppResult<Vec<Order>> {
        self.check()?;
        // NULL <> 'EN_COURS' is not true either
        Ok(self
            .tables
            .lock()
            .orders
            .iter()
            .filter(|o| matches!(o.status.as_deref(), Some(s) if s != ORDER_STATUS_IN_PROGRESS))
            .cloned()
            .collect())
    }

    async fn find_order(&self, id: i32) -> AppResult<Option<Order>> {
        self.check()?;
        Ok(self.tables.lock().orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list_order_lines(&self, order_id: i32) -> AppResult<Vec<OrderLine>> {
        self.check()?;
        let t = self.tables.lock();
        Ok(t.lines
            .iter()
            .filter(|(order, _, _)| *order == order_id)
            .map(|(_, dish_id, quantity)| {
                let dish = t.menus.iter().map(|(d, _)| d).find(|d| d.id == *dish_id);
                OrderLine {
                    dish_id: dish.map(|d| d.id),
                    dish_name: dish.and_then(|d| d.name.clone()),
                    description: dish.and_then(|d| d.description.clone()),
                    price: dish.and_then(|d| d.price),
                    quantity: Some(*quantity),
                }
            })
            .collect())
    }

    async fn create_order(&self, data: &OrderCreate) -> AppResult<()> {
        self.check()?;
        let customer_id = data.customer_id.ok_or_else(|| not_null("id_client", "commandes"))?;
        let total = data.total.ok_or_else(|| not_null("total_commande", "commandes"))?;

        let mut t = self.tables.lock();
        if !t.customers.iter().any(|c| c.id == customer_id) {
            return Err(AppError::database(
                "insert or update on table \"commandes\" violates foreign key constraint \
                 \"commandes_id_client_fkey\"",
            ));
        }
        let id = t.next_id();
        t.orders.push(Order {
            id,
            customer_id: Some(customer_id),
            employee_id: data.employee_id,
            created_at: Some(Utc::now().naive_utc()),
            status: Some(ORDER_STATUS_IN_PROGRESS.into()),
            total: Some(total),
        });
        Ok(())
    }

    async fn update_order_status(&self, id: i32, status: Option<&str>) -> AppResult<()> {
        self.check()?;
        let mut t = self.tables.lock();
        if let Some(order) = t.orders.iter_mut().find(|o| o.id == id) {
            let status = status.ok_or_else(|| not_null("statut", "commandes"))?;
            order.status = Some(status.into());
        }
        Ok(())
    }

    async fn delete_order(&self, id: i32) -> AppResult<()> {
        self.check()?;
        let mut t = self.tables.lock();
        t.orders.retain(|o| o.id != id);
        t.lines.retain(|(order, _, _)| *order != id);
        Ok(())
    }
}

#[async_trait]
impl StockGateway for MemoryGateway {
    async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        self.check()?;
        Ok(self.tables.lock().inventory.clone())
    }

    async fn list_restock(&self) -> AppResult<Vec<InventoryItem>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .inventory
            .iter()
            .filter(|i| needs_restock(i))
            .cloned()
            .collect())
    }

    async fn list_available_dishes(&self) -> AppResult<Vec<Dish>> {
        self.check()?;
        Ok(self
            .tables
            .lock()
            .menus
            .iter()
            .filter(|(_, available)| *available)
            .map(|(dish, _)| dish.clone())
            .collect())
    }

    async fn update_quantity(&self, id: i32, quantity: Option<i32>) -> AppResult<()> {
        self.check()?;
        let mut t = self.tables.lock();
        if let Some(item) = t.inventory.iter_mut().find(|i| i.id == id) {
            let quantity = quantity.ok_or_else(|| not_null("quantite_disponible", "inventaire"))?;
            item.quantity = Some(quantity);
        }
        Ok(())
    }

    async fn create_inventory_item(&self, data: &InventoryCreate) -> AppResult<()> {
        self.check()?;
        let name = data.name.clone().ok_or_else(|| not_null("nom_produit", "inventaire"))?;
        let quantity = data
            .quantity
            .ok_or_else(|| not_null("quantite_disponible", "inventaire"))?;
        let threshold = data
            .threshold
            .ok_or_else(|| not_null("seuil_critique", "inventaire"))?;

        let mut t = self.tables.lock();
        let id = t.next_id();
        t.inventory.push(InventoryItem {
            id,
            name: Some(name),
            quantity: Some(quantity),
            threshold: Some(threshold),
        });
        Ok(())
    }

    async fn delete_inventory_item(&self, id: i32) -> AppResult<()> {
        self.check()?;
        self.tables.lock().inventory.retain(|i| i.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: Option<i32>, threshold: Option<i32>) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: Some("Farine".into()),
            quantity,
            threshold,
        }
    }

    #[test]
    fn test_needs_restock_is_strict() {
        assert!(needs_restock(&item(Some(5), Some(10))));
        assert!(needs_restock(&item(Some(9), Some(10))));
        assert!(!needs_restock(&item(Some(10), Some(10))));
        assert!(!needs_restock(&item(Some(11), Some(10))));
    }

    #[test]
    fn test_needs_restock_with_nulls() {
        assert!(!needs_restock(&item(None, Some(10))));
        assert!(!needs_restock(&item(Some(1), None)));
    }
}
