//! Shared types for the Foody API
//!
//! Row models, request payloads and the unified error system used by
//! `foody-server` and its tests.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use serde::{Deserialize, Serialize};
