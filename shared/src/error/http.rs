//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status for this error code
    ///
    /// Only a missing order gets its own status; every other failure is
    /// reported as 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::OrderNotFound => StatusCode::NOT_FOUND,

            Self::InvalidRequest | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
