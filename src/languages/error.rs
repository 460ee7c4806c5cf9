//! Error types for fetching the language list.

use std::time::Duration;

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out inside the HTTP client.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for [`LanguageSource::fetch`](super::LanguageSource::fetch).
///
/// None of these are retried; the parse that triggered the fetch fails.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request failed.
    #[error("language list request failed: {0}")]
    Http(#[from] HttpError),

    /// No response arrived within the configured timeout.
    #[error("language list request timed out after {}s", after.as_secs())]
    Timeout {
        /// The timeout that elapsed
        after: Duration,
    },

    /// The server answered with a non-success status.
    #[error("language list request returned HTTP {0}")]
    Status(http::StatusCode),

    /// The response body is not the expected JSON document.
    #[error("malformed language list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The runtime driving the request could not be created.
    #[error("failed to start HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
