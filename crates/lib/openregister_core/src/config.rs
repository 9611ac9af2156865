//! OpenRegister API configuration.
//!
//! Resolved once at startup and handed to the [`crate::RegistryClient`];
//! nothing in the crate reads the environment after that.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default OpenRegister API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openregister.de/v0";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for the shareholders endpoint, which can take up to a minute.
pub const DEFAULT_SHAREHOLDERS_TIMEOUT: Duration = Duration::from_secs(90);

/// Configuration for the OpenRegister API client.
#[derive(Clone)]
pub struct RegistryConfig {
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_key: Option<String>,
    /// Timeout applied to search and company detail requests.
    pub timeout: Duration,
    /// Timeout applied to shareholder requests.
    pub shareholders_timeout: Duration,
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("shareholders_timeout", &self.shareholders_timeout)
            .finish()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            shareholders_timeout: DEFAULT_SHAREHOLDERS_TIMEOUT,
        }
    }
}

impl RegistryConfig {
    /// Build a config for `base_url` with default timeouts.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            api_key,
            ..Self::default()
        })
    }

    /// Reads configuration from environment variables.
    ///
    /// | Variable                                 | Default                          |
    /// |------------------------------------------|----------------------------------|
    /// | `OPENREGISTER_API_URL`                   | `https://api.openregister.de/v0` |
    /// | `OPENREGISTER_API_KEY`                   | unset                            |
    /// | `OPENREGISTER_TIMEOUT_SECS`              | `30`                             |
    /// | `OPENREGISTER_SHAREHOLDERS_TIMEOUT_SECS` | `90`                             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("OPENREGISTER_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let api_key = lookup("OPENREGISTER_API_KEY").filter(|k| !k.is_empty());

        let timeout = match lookup("OPENREGISTER_TIMEOUT_SECS") {
            Some(raw) => parse_timeout("OPENREGISTER_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TIMEOUT,
        };
        let shareholders_timeout = match lookup("OPENREGISTER_SHAREHOLDERS_TIMEOUT_SECS") {
            Some(raw) => parse_timeout("OPENREGISTER_SHAREHOLDERS_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_SHAREHOLDERS_TIMEOUT,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            api_key,
            timeout,
            shareholders_timeout,
        })
    }
}

/// Validate an absolute http(s) URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Parse a positive number of seconds.
pub fn parse_timeout(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = RegistryConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.shareholders_timeout, Duration::from_secs(90));
    }

    #[test]
    fn overrides_are_read_from_lookup() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            ("OPENREGISTER_API_URL", "http://localhost:9000/v1/"),
            ("OPENREGISTER_API_KEY", "secret"),
            ("OPENREGISTER_TIMEOUT_SECS", "5"),
            ("OPENREGISTER_SHAREHOLDERS_TIMEOUT_SECS", "120"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.shareholders_timeout, Duration::from_secs(120));
    }

    #[test]
    fn empty_api_key_is_treated_as_unset() {
        let config =
            RegistryConfig::from_lookup(lookup_from(&[("OPENREGISTER_API_KEY", "")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn rejects_zero_and_non_numeric_timeouts() {
        let zero = RegistryConfig::from_lookup(lookup_from(&[("OPENREGISTER_TIMEOUT_SECS", "0")]));
        assert!(matches!(zero, Err(ConfigError::InvalidTimeout { .. })));

        let junk = RegistryConfig::from_lookup(lookup_from(&[(
            "OPENREGISTER_SHAREHOLDERS_TIMEOUT_SECS",
            "soon",
        )]));
        assert!(matches!(junk, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn rejects_non_http_base_urls() {
        assert!(matches!(
            normalize_base_url("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = RegistryConfig::new(DEFAULT_BASE_URL, Some("top-secret".into())).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
