use std::sync::Arc;

use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};

use super::{router, QuickbaseService};
use crate::repos::{RepoKind, RepoPaths};
use crate::search::{CodeSearcher, RipgrepSearcher};
use crate::{SERVER_NAME, SERVER_VERSION};

impl QuickbaseService {
    pub fn new() -> Self {
        Self::with_collaborators(RepoPaths::from_env(), Arc::new(RipgrepSearcher::new()))
    }

    pub fn with_collaborators(repos: RepoPaths, searcher: Arc<dyn CodeSearcher>) -> Self {
        for kind in RepoKind::ALL {
            log::debug!(
                "{} checkout: {}",
                kind.display_name(),
                repos.path(kind).display()
            );
        }
        Self {
            repos: Arc::new(repos),
            searcher,
            tool_router: router::build_tool_router(),
        }
    }
}

impl Default for QuickbaseService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for QuickbaseService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("QuickBase SDK companion. Use 'search_code' to grep the JS SDK, Go SDK and spec checkouts, 'compare_implementations' to view one feature in both SDKs, and 'list_features' / 'check_parity' for the feature inventory.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
