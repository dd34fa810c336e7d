//! Fetch error types for the gateway layer.

use thiserror::Error;

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("HTTP error from {endpoint}: {message}")]
    Http { endpoint: String, message: String },

    /// A response body could not be decoded.
    #[error("parse error from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },

    /// The call did not complete within the configured timeout.
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// The configured base URL cannot be used.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The fetched data violated a catalog invariant.
    #[error("catalog error: {0}")]
    Catalog(#[from] marquee_core::Error),
}

impl FetchError {
    /// Returns `true` when the error is transient and the call may succeed
    /// if the user tries again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` when the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { message, .. } if message.contains("404"))
    }
}

/// Convenience alias for gateway results.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
