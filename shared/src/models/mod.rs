//! Data models
//!
//! Row types returned by the store and payloads accepted by the API.
//! Rust fields are English; JSON keys are the store's column names, so a
//! serialized row looks exactly like the row set the store returned.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i32` (PostgreSQL SERIAL).

pub mod customer;
pub mod order;
pub mod stock;

// Re-exports
pub use customer::*;
pub use order::*;
pub use stock::*;
