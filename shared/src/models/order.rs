//! Order Model (`Commandes`, `Details_Commande` tables)

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status written on every new order
pub const ORDER_STATUS_IN_PROGRESS: &str = "EN_COURS";

/// Status counted by the customer ranking
pub const ORDER_STATUS_PAID: &str = "PAYE";

/// Order row
///
/// `status` is free text; the API never validates transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    #[serde(rename = "id_commande")]
    pub id: i32,
    #[serde(rename = "id_client")]
    pub customer_id: Option<i32>,
    #[serde(rename = "id_employe")]
    pub employee_id: Option<i32>,
    #[serde(rename = "date_commande")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "statut")]
    pub status: Option<String>,
    #[serde(rename = "total_commande")]
    pub total: Option<Decimal>,
}

/// In-progress order (status column not projected)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PendingOrder {
    #[serde(rename = "id_commande")]
    pub id: i32,
    #[serde(rename = "id_client")]
    pub customer_id: Option<i32>,
    #[serde(rename = "id_employe")]
    pub employee_id: Option<i32>,
    #[serde(rename = "date_commande")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "total_commande")]
    pub total: Option<Decimal>,
}

impl From<Order> for PendingOrder {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            employee_id: order.employee_id,
            created_at: order.created_at,
            total: order.total,
        }
    }
}

/// Order line joined with its dish
///
/// Dish columns are NULL when the line points at a dish that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLine {
    #[serde(rename = "id_plat")]
    pub dish_id: Option<i32>,
    #[serde(rename = "nom_plat")]
    pub dish_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "prix")]
    pub price: Option<Decimal>,
    #[serde(rename = "quantite")]
    pub quantity: Option<i32>,
}

/// Order with its line items under `details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub details: Vec<OrderLine>,
}

/// Create order payload
///
/// Status and timestamp are assigned server-side; any such fields in the
/// request body are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderCreate {
    #[serde(rename = "id_client")]
    pub customer_id: Option<i32>,
    #[serde(rename = "id_employe")]
    pub employee_id: Option<i32>,
    #[serde(rename = "total_commande")]
    pub total: Option<Decimal>,
}

/// Order status update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusUpdate {
    pub status: Option<String>,
}
