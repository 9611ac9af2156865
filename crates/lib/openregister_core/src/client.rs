//! HTTP request executor for the OpenRegister API.
//!
//! One authenticated GET per call, bounded by a timeout. Failures of any kind
//! are logged here and returned as [`RegistryError`]; callers never see a
//! panic or a raw transport error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::request::{Endpoint, RegistryRequest};

/// Executes registry requests.
///
/// Implemented by [`RegistryClient`] for real HTTP calls; tests substitute
/// their own implementation to drive the company lookups.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Perform `request` and return the parsed JSON body.
    async fn execute(&self, request: RegistryRequest) -> Result<Value, RegistryError>;
}

/// reqwest-backed executor.
///
/// Holds only immutable configuration. Each call builds its own HTTP client,
/// which is dropped when the call returns or its future is dropped.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: Arc<RegistryConfig>,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Timeout for a given endpoint. Shareholder lookups get their own, longer bound.
    pub fn timeout_for(&self, endpoint: &Endpoint) -> Duration {
        match endpoint {
            Endpoint::CompanyShareholders(_) => self.config.shareholders_timeout,
            _ => self.config.timeout,
        }
    }

    async fn send(&self, request: &RegistryRequest) -> Result<Value, RegistryError> {
        let timeout = self.timeout_for(&request.endpoint);
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let url = request.url(&self.config.base_url);
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let mut builder = client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(ACCEPT, "application/json");
        if let Some(params) = &request.params {
            builder = builder.query(params);
        }

        debug!(url = %url, timeout = ?timeout, "sending registry request");

        let resp = builder
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| classify(e, timeout))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| RegistryError::Decode(e.to_string()))?;
        if is_falsy(&value) {
            return Err(RegistryError::EmptyPayload);
        }
        Ok(value)
    }
}

/// JSON values that count as "no data": `null`, `false`, zero, and empty
/// strings, arrays, or objects.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[async_trait]
impl RequestExecutor for RegistryClient {
    async fn execute(&self, request: RegistryRequest) -> Result<Value, RegistryError> {
        let result = self.send(&request).await;
        if let Err(e) = &result {
            warn!(endpoint = %request.endpoint, error = %e, "registry request failed");
        }
        result
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> RegistryError {
    if err.is_timeout() {
        RegistryError::Timeout(timeout)
    } else {
        RegistryError::Transport(err.to_string())
    }
}
