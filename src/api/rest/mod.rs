//! REST endpoint handlers
//!
//! - `GET`/`POST /stringinate` - per-string length and frequency report
//! - `GET`/`POST /transform` - case transformations
//! - `GET /stats` - aggregate statistics snapshot
//! - `GET /reset-stats` - wipe aggregate statistics

pub mod stats;
pub mod strings;
pub mod transform;

use serde::Serialize;

/// Maximum accepted byte length for inputs passed as query parameters
pub const MAX_QUERY_INPUT_BYTES: usize = 1000;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}
