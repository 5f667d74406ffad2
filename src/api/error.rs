//! Error types for the remote API client.

use thiserror::Error;

/// Errors from a single remote call.
///
/// The state layer only ever sees the `Display` form of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a status that doesn't count as success
    #[error("{status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body didn't match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl ApiError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}
