//! Application state

use std::sync::Arc;

use crate::db::Gateway;

/// Shared application state handed to every handler
///
/// Holds nothing but the database gateway (and through it the pool).
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Gateway>,
}

impl AppState {
    pub fn new(db: Arc<dyn Gateway>) -> Self {
        Self { db }
    }
}
