//! MCP server handler: defines the OpenRegister MCP server and its tools.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use openregister_core::{CompanySearch, RequestExecutor, ToolResponse, company};

use crate::tools::company::{
    GetCompanyInfoRequest, GetCompanyShareholdersRequest, SearchCompaniesRequest,
};

/// OpenRegister MCP server handler.
///
/// Holds the request executor shared by all tools and a `ToolRouter` for
/// dispatch. Cloned per session by the Streamable HTTP service factory.
#[derive(Clone)]
pub struct OpenRegisterMcpServer {
    executor: Arc<dyn RequestExecutor>,
    tool_router: ToolRouter<Self>,
}

/// Helper to serialize a tool response to a pretty JSON CallToolResult.
fn json_result(response: &ToolResponse) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl OpenRegisterMcpServer {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            executor,
            tool_router: Self::tool_router(),
        }
    }

    /// Return tool definitions registered in this server.
    #[cfg(test)]
    pub(crate) fn list_tools() -> Vec<rmcp::model::Tool> {
        Self::tool_router().list_all()
    }

    /// Search for companies based on various criteria.
    #[tool(
        description = "Search for companies based on various criteria: name query, register number, register type (HRB, HRA, PR, GnR, VR), register court, active status (default true), and legal form (gmbh, ag, ug)."
    )]
    async fn search_companies(
        &self,
        Parameters(req): Parameters<SearchCompaniesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let search = CompanySearch::from(req);
        info!(query = ?search.query, active = search.active, "search_companies");

        let response = company::search_companies(self.executor.as_ref(), &search).await;
        json_result(&response)
    }

    /// Get detailed information about a company.
    #[tool(
        description = "Get detailed information about a company using its unique ID (e.g. \"DE-HRB-F1103-267645\"). Historical data, financials, and document metadata are included unless disabled."
    )]
    async fn get_company_info(
        &self,
        Parameters(req): Parameters<GetCompanyInfoRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let options = req.options();
        info!(company_id = %req.company_id, ?options, "get_company_info");

        let response =
            company::get_company_info(self.executor.as_ref(), &req.company_id, options).await;
        json_result(&response)
    }

    /// Retrieve the shareholders of a company.
    #[tool(
        description = "Retrieve the shareholders of a company using its unique ID. Only companies with the legal form GmbH are supported, and the request can take up to 60 seconds to complete."
    )]
    async fn get_company_shareholders(
        &self,
        Parameters(GetCompanyShareholdersRequest { company_id }): Parameters<
            GetCompanyShareholdersRequest,
        >,
    ) -> Result<CallToolResult, ErrorData> {
        info!(company_id = %company_id, "get_company_shareholders");

        let response =
            company::get_company_shareholders(self.executor.as_ref(), &company_id).await;
        json_result(&response)
    }
}

#[tool_handler]
impl ServerHandler for OpenRegisterMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "OpenRegister MCP server: search the German company register, fetch company \
                 details, and list shareholders of GmbH companies"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "openregister".into(),
                version: crate::version().into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
