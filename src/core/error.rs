// src/core/error.rs
//! Error taxonomy for the REST boundary.
//!
//! Every failure a page can see is one of these. Nothing here is fatal:
//! service functions propagate the error and the calling page renders an
//! inline error view instead of crashing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, refused connection, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Missing, invalid or expired credentials (HTTP 401).
    #[error("authentication failed or token rejected")]
    Unauthorized,

    /// The backend rejected the input (HTTP 400/422).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Backend-side failure (HTTP 5xx).
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("unexpected HTTP status {status}: {message}")]
    Unexpected { status: u16, message: String },
}

impl ApiError {
    /// Only transient failures are worth retrying. Rejected input or
    /// rejected credentials will not get better on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Server { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
