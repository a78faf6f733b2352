//! Customer Model (`Clients` table)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    #[serde(rename = "id_client")]
    pub id: i32,
    #[serde(rename = "nom")]
    pub last_name: Option<String>,
    #[serde(rename = "prenom")]
    pub first_name: Option<String>,
    pub contact: Option<String>,
    /// Starts at 0 and is never incremented by the API
    #[serde(rename = "points_fidelite")]
    pub loyalty_points: i32,
}

/// Customer with its position in the paid-revenue ranking
///
/// `rank` follows SQL `RANK()`: equal totals share a rank and the next
/// distinct total skips ahead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RankedCustomer {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub customer: Customer,
    pub rank: i64,
}

/// Create customer payload
///
/// Absent fields are bound as NULL; the store decides whether that is allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CustomerCreate {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub contact: Option<String>,
}
