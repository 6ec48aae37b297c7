//! MCP tool surface: request schemas, the tool router, and the service that ties them to the
//! repository and search collaborators.

mod handlers;
mod param_errors;
mod router;
mod schemas;
mod service;

use std::sync::Arc;

use crate::repos::RepoPaths;
use crate::search::CodeSearcher;

/// QuickBase SDK companion MCP service
#[derive(Clone)]
pub struct QuickbaseService {
    /// Checkout locations, resolved once at startup
    repos: Arc<RepoPaths>,
    /// Text search backend for `search_code`
    searcher: Arc<dyn CodeSearcher>,
    /// Tool router
    tool_router: param_errors::ToolRouterWithDecodeErrors<Self>,
}
