//! Error types for registry calls and configuration.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single registry request.
///
/// Every variant is reported to callers as the same endpoint-specific error
/// object; the detail only reaches the log.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON response: {0}")]
    Decode(String),

    #[error("Empty response payload")]
    EmptyPayload,
}

/// Configuration errors raised while resolving [`crate::RegistryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidTimeout { key: String, value: String },
}
