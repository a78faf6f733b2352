//! Foody API server
//!
//! REST API over the restaurant database: customers, orders with their line
//! items, inventory and available dishes. Each endpoint runs one
//! parameterized statement (order details runs two) and answers with the
//! rows as JSON.
//!
//! # Module layout
//!
//! ```text
//! foody-server/src/
//! ├── api/         # routers, handlers, OpenAPI document
//! ├── db/          # database gateway (PostgreSQL)
//! ├── config.rs    # environment configuration
//! ├── logger.rs    # tracing subscriber setup
//! ├── middleware.rs
//! ├── server.rs    # bootstrap + graceful shutdown
//! └── state.rs
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod middleware;
pub mod server;
pub mod state;

pub use api::build_app;
pub use config::Config;
pub use db::{Gateway, PgGateway};
pub use server::Server;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
