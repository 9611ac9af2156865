//! Company lookup tools: parameter types.

use schemars::JsonSchema;
use serde::Deserialize;

use openregister_core::{CompanyInfoOptions, CompanySearch};

fn default_true() -> bool {
    true
}

/// Parameters for the `search_companies` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchCompaniesRequest {
    /// Text search query to find companies by name (e.g. "Descartes Technologies UG").
    pub query: Option<String>,
    /// Company register number for exact matching (e.g. "230633").
    pub register_number: Option<String>,
    /// Type of register to filter results (e.g. "HRB", "HRA", "PR", "GnR", "VR").
    pub register_type: Option<String>,
    /// Court where the company is registered (e.g. "Berlin (Charlottenburg)").
    pub register_court: Option<String>,
    /// Filter for active or inactive companies. Defaults to true.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Legal form of the company (e.g. "gmbh", "ag", "ug").
    pub legal_form: Option<String>,
}

impl From<SearchCompaniesRequest> for CompanySearch {
    fn from(req: SearchCompaniesRequest) -> Self {
        CompanySearch {
            query: req.query,
            register_number: req.register_number,
            register_type: req.register_type,
            register_court: req.register_court,
            active: req.active,
            legal_form: req.legal_form,
        }
    }
}

/// Parameters for the `get_company_info` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCompanyInfoRequest {
    /// Unique company identifier (e.g. "DE-HRB-F1103-267645").
    pub company_id: String,
    /// Include historical company data. Defaults to true.
    #[serde(default = "default_true")]
    pub history: bool,
    /// Include financial data. Defaults to true.
    #[serde(default = "default_true")]
    pub financials: bool,
    /// Include document metadata. Defaults to true.
    #[serde(default = "default_true")]
    pub documents: bool,
}

impl GetCompanyInfoRequest {
    pub fn options(&self) -> CompanyInfoOptions {
        CompanyInfoOptions {
            history: self.history,
            financials: self.financials,
            documents: self.documents,
        }
    }
}

/// Parameters for the `get_company_shareholders` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCompanyShareholdersRequest {
    /// Unique company identifier (e.g. "DE-HRB-F1103-267645").
    pub company_id: String,
}
