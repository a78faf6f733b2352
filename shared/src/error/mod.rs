//! Unified error system for the Foody API
//!
//! - [`ErrorCode`]: numeric error codes, each mapped to an HTTP status
//! - [`ErrorCategory`]: classification of codes by range
//! - [`AppError`]: code + message, rendered as `{ "message": ... }`
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 9xxx: System errors (store, connection, internal)
//!
//! Every error except a missing order detail is answered with HTTP 500 and
//! the underlying message text.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::order_not_found();
//! assert_eq!(err.code, ErrorCode::OrderNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
