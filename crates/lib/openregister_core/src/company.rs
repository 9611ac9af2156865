//! Company lookups: search, details, and shareholders.
//!
//! Each lookup maps its arguments onto a [`RegistryRequest`], hands it to a
//! [`RequestExecutor`], and turns the outcome into a [`ToolResponse`]. A
//! failed call becomes a fixed, endpoint-specific error object.

use serde::Serialize;
use serde_json::Value;

use crate::client::RequestExecutor;
use crate::error::RegistryError;
use crate::request::{Endpoint, RegistryRequest};

/// Result of a company lookup as seen by the caller.
///
/// Serializes untagged: either the upstream JSON verbatim or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Payload(Value),
    Error { error: String },
}

impl ToolResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ToolResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolResponse::Error { .. })
    }

    /// JSON value of this response.
    pub fn into_value(self) -> Value {
        match self {
            ToolResponse::Payload(value) => value,
            ToolResponse::Error { error } => serde_json::json!({ "error": error }),
        }
    }
}

/// Filters for [`search_companies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySearch {
    pub query: Option<String>,
    pub register_number: Option<String>,
    pub register_type: Option<String>,
    pub register_court: Option<String>,
    pub active: bool,
    pub legal_form: Option<String>,
}

impl Default for CompanySearch {
    fn default() -> Self {
        Self {
            query: None,
            register_number: None,
            register_type: None,
            register_court: None,
            active: true,
            legal_form: None,
        }
    }
}

impl CompanySearch {
    /// Query parameters for this search.
    ///
    /// Absent and empty filters are left out; `active` is always sent.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push_present(&mut params, "query", &self.query);
        push_present(&mut params, "register_number", &self.register_number);
        push_present(&mut params, "register_type", &self.register_type);
        push_present(&mut params, "register_court", &self.register_court);
        params.push(("active".to_string(), self.active.to_string()));
        push_present(&mut params, "legal_form", &self.legal_form);
        params
    }
}

fn push_present(params: &mut Vec<(String, String)>, name: &str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((name.to_string(), v.to_string()));
    }
}

/// Sections to include with [`get_company_info`]. All default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyInfoOptions {
    pub history: bool,
    pub financials: bool,
    pub documents: bool,
}

impl Default for CompanyInfoOptions {
    fn default() -> Self {
        Self {
            history: true,
            financials: true,
            documents: true,
        }
    }
}

impl CompanyInfoOptions {
    /// All three flags, always present.
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("history".to_string(), self.history.to_string()),
            ("financials".to_string(), self.financials.to_string()),
            ("documents".to_string(), self.documents.to_string()),
        ]
    }
}

/// Build the request for a company search.
pub fn search_request(search: &CompanySearch) -> RegistryRequest {
    RegistryRequest::with_params(Endpoint::SearchCompany, search.to_params())
}

/// Build the request for a company detail lookup.
pub fn company_info_request(company_id: &str, options: CompanyInfoOptions) -> RegistryRequest {
    RegistryRequest::with_params(Endpoint::Company(company_id.to_string()), options.to_params())
}

/// Build the request for a shareholder lookup.
pub fn shareholders_request(company_id: &str) -> RegistryRequest {
    RegistryRequest::new(Endpoint::CompanyShareholders(company_id.to_string()))
}

/// Search for companies by name, register data, status, or legal form.
pub async fn search_companies<E>(executor: &E, search: &CompanySearch) -> ToolResponse
where
    E: RequestExecutor + ?Sized,
{
    let result = executor.execute(search_request(search)).await;
    respond(result, || "Unable to fetch company data.".to_string())
}

/// Fetch details for one company.
pub async fn get_company_info<E>(
    executor: &E,
    company_id: &str,
    options: CompanyInfoOptions,
) -> ToolResponse
where
    E: RequestExecutor + ?Sized,
{
    let result = executor
        .execute(company_info_request(company_id, options))
        .await;
    respond(result, || {
        format!("Unable to fetch information for company ID: {company_id}")
    })
}

/// Fetch the shareholders of one company.
///
/// Upstream only supports GmbH companies and may take up to a minute.
pub async fn get_company_shareholders<E>(executor: &E, company_id: &str) -> ToolResponse
where
    E: RequestExecutor + ?Sized,
{
    let result = executor.execute(shareholders_request(company_id)).await;
    respond(result, || {
        format!("Unable to fetch shareholders for company ID: {company_id}")
    })
}

/// Map an executor result onto the caller-facing response.
fn respond<F>(result: Result<Value, RegistryError>, message: F) -> ToolResponse
where
    F: FnOnce() -> String,
{
    match result {
        Ok(value) => ToolResponse::Payload(value),
        Err(_) => ToolResponse::error(message()),
    }
}
