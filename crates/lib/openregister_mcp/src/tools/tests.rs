//! Tests for MCP tool registration and parameter decoding.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use openregister_core::{CompanyInfoOptions, CompanySearch};

    use crate::server::OpenRegisterMcpServer;
    use crate::tools::company::{
        GetCompanyInfoRequest, GetCompanyShareholdersRequest, SearchCompaniesRequest,
    };

    #[test]
    fn server_exposes_three_tools() {
        let tools = OpenRegisterMcpServer::list_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(tools.len(), 3, "Expected 3 tools, got: {names:?}");
        assert!(names.contains(&"search_companies"));
        assert!(names.contains(&"get_company_info"));
        assert!(names.contains(&"get_company_shareholders"));
    }

    #[test]
    fn shareholders_tool_documents_upstream_limits() {
        let tools = OpenRegisterMcpServer::list_tools();
        let tool = tools
            .iter()
            .find(|t| t.name == "get_company_shareholders")
            .expect("shareholders tool");
        let description = tool.description.as_deref().unwrap_or_default();
        assert!(description.contains("GmbH"));
        assert!(description.contains("60 seconds"));
    }

    #[test]
    fn search_request_defaults_active_to_true() {
        let req: SearchCompaniesRequest = serde_json::from_value(json!({})).expect("parse");
        assert!(req.active);
        assert_eq!(CompanySearch::from(req), CompanySearch::default());
    }

    #[test]
    fn search_request_maps_all_filters() {
        let req: SearchCompaniesRequest = serde_json::from_value(json!({
            "query": "Descartes Technologies UG",
            "register_number": "230633",
            "register_type": "HRB",
            "register_court": "Berlin (Charlottenburg)",
            "active": false,
            "legal_form": "ug"
        }))
        .expect("parse");

        let search = CompanySearch::from(req);
        assert_eq!(search.query.as_deref(), Some("Descartes Technologies UG"));
        assert_eq!(search.register_number.as_deref(), Some("230633"));
        assert_eq!(search.register_type.as_deref(), Some("HRB"));
        assert_eq!(search.register_court.as_deref(), Some("Berlin (Charlottenburg)"));
        assert!(!search.active);
        assert_eq!(search.legal_form.as_deref(), Some("ug"));
    }

    #[test]
    fn company_info_request_defaults_flags_to_true() {
        let req: GetCompanyInfoRequest =
            serde_json::from_value(json!({"company_id": "DE-HRB-F1103-267645"})).expect("parse");
        assert_eq!(req.company_id, "DE-HRB-F1103-267645");
        assert_eq!(req.options(), CompanyInfoOptions::default());
    }

    #[test]
    fn company_info_request_requires_company_id() {
        let parsed = serde_json::from_value::<GetCompanyInfoRequest>(json!({"history": false}));
        assert!(parsed.is_err());
    }

    #[test]
    fn shareholders_request_requires_company_id() {
        let parsed = serde_json::from_value::<GetCompanyShareholdersRequest>(json!({}));
        assert!(parsed.is_err());
    }
}
