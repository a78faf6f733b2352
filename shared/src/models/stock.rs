//! Stock Models (`Inventaire`, `Menus` tables)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inventory row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryItem {
    #[serde(rename = "id_produit")]
    pub id: i32,
    #[serde(rename = "nom_produit")]
    pub name: Option<String>,
    #[serde(rename = "quantite_disponible")]
    pub quantity: Option<i32>,
    #[serde(rename = "seuil_critique")]
    pub threshold: Option<i32>,
}

/// Create inventory item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct InventoryCreate {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub threshold: Option<i32>,
}

/// Inventory quantity update payload (full replacement, not a delta)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuantityUpdate {
    pub quantity: Option<i32>,
}

/// Available dish (menu projection without the availability flag)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    #[serde(rename = "id_plat")]
    pub id: i32,
    #[serde(rename = "nom_plat")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "prix")]
    pub price: Option<Decimal>,
}
