//! Request descriptors for the OpenRegister API.

use std::fmt;

/// An OpenRegister API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `search/company`
    SearchCompany,
    /// `company/{id}`
    Company(String),
    /// `company/{id}/shareholders`
    CompanyShareholders(String),
}

impl Endpoint {
    /// Path relative to the API base URL.
    ///
    /// Company IDs are interpolated as given; URL encoding is left to the
    /// HTTP layer.
    pub fn path(&self) -> String {
        match self {
            Endpoint::SearchCompany => "search/company".to_string(),
            Endpoint::Company(id) => format!("company/{id}"),
            Endpoint::CompanyShareholders(id) => format!("company/{id}/shareholders"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A single GET request: endpoint plus query parameters.
///
/// Built once per tool invocation and consumed by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRequest {
    pub endpoint: Endpoint,
    pub params: Option<Vec<(String, String)>>,
}

impl RegistryRequest {
    /// Request without query parameters.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: None,
        }
    }

    /// Request with the given query parameters.
    pub fn with_params(endpoint: Endpoint, params: Vec<(String, String)>) -> Self {
        Self {
            endpoint,
            params: Some(params),
        }
    }

    /// Full URL for this request under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.endpoint.path())
    }

    /// Look up a query parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .as_ref()?
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::SearchCompany.path(), "search/company");
        assert_eq!(
            Endpoint::Company("DE-HRB-F1103-267645".into()).path(),
            "company/DE-HRB-F1103-267645"
        );
        assert_eq!(
            Endpoint::CompanyShareholders("DE-HRB-F1103-267645".into()).path(),
            "company/DE-HRB-F1103-267645/shareholders"
        );
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let req = RegistryRequest::new(Endpoint::SearchCompany);
        assert_eq!(
            req.url("https://api.openregister.de/v0/"),
            "https://api.openregister.de/v0/search/company"
        );
    }

    #[test]
    fn param_lookup() {
        let req = RegistryRequest::with_params(
            Endpoint::SearchCompany,
            vec![("active".into(), "true".into())],
        );
        assert_eq!(req.param("active"), Some("true"));
        assert_eq!(req.param("query"), None);
        assert_eq!(RegistryRequest::new(Endpoint::SearchCompany).param("active"), None);
    }
}
