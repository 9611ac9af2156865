//! # openregister_core
//!
//! Core domain logic for OpenRegister MCP.
//!
//! - [`client`]: the HTTP request executor for the OpenRegister API
//! - [`company`]: the three company lookups (search, details, shareholders)
//! - [`config`]: process-wide API configuration, resolved once at startup

pub mod client;
pub mod company;
pub mod config;
pub mod error;
pub mod request;

pub use client::{RegistryClient, RequestExecutor};
pub use company::{CompanyInfoOptions, CompanySearch, ToolResponse};
pub use config::RegistryConfig;
pub use error::{ConfigError, RegistryError};
pub use request::{Endpoint, RegistryRequest};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
