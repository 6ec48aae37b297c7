use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content};
use rmcp::{tool, tool_router, ErrorData as McpError};

use super::handlers;
use super::param_errors::ToolRouterWithDecodeErrors;
use super::schemas::{
    CompareImplementationsRequest, GetAuthExampleRequest, ListFeaturesRequest, SearchCodeRequest,
};
use super::QuickbaseService;
use crate::error::Result as ToolResult;

pub(super) fn build_tool_router() -> ToolRouterWithDecodeErrors<QuickbaseService> {
    ToolRouterWithDecodeErrors::new(QuickbaseService::tool_router())
}

fn text_result(result: ToolResult<String>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => CallToolResult::error(vec![Content::text(err.to_string())]),
    }
}

#[tool_router]
impl QuickbaseService {
    #[tool(description = "Search across your QuickBase SDK repositories (JS, Go, and spec).")]
    pub async fn search_code(
        &self,
        Parameters(request): Parameters<SearchCodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        log::debug!(
            "search_code query={:?} repo={:?}",
            request.query,
            request.repo
        );
        let text = handlers::search_code(&self.repos, self.searcher.as_ref(), request).await;
        Ok(text_result(Ok(text)))
    }

    #[tool(description = "Compare how a feature is implemented in JavaScript vs Go SDK.")]
    pub async fn compare_implementations(
        &self,
        Parameters(request): Parameters<CompareImplementationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        log::debug!("compare_implementations feature={:?}", request.feature);
        Ok(text_result(
            handlers::compare_implementations(&self.repos, &request.feature).await,
        ))
    }

    #[tool(description = "Get authentication examples from your SDKs.")]
    pub async fn get_auth_example(
        &self,
        Parameters(request): Parameters<GetAuthExampleRequest>,
    ) -> Result<CallToolResult, McpError> {
        log::debug!(
            "get_auth_example auth_type={:?} language={:?}",
            request.auth_type,
            request.language
        );
        Ok(text_result(Ok(handlers::get_auth_example(request))))
    }

    #[tool(description = "List what features are implemented in your SDKs.")]
    pub async fn list_features(
        &self,
        Parameters(request): Parameters<ListFeaturesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(Ok(handlers::list_features(request))))
    }

    #[tool(description = "Check feature parity between JavaScript and Go SDKs.")]
    pub async fn check_parity(&self) -> Result<CallToolResult, McpError> {
        log::debug!("check_parity");
        Ok(text_result(Ok(handlers::check_parity())))
    }
}
