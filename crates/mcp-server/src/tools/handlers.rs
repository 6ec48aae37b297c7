//! Tool bodies, kept free of MCP types so they can be driven directly in tests.

use std::path::Path;

use super::schemas::{GetAuthExampleRequest, ListFeaturesRequest, SearchCodeRequest};
use crate::catalog;
use crate::error::{Result, ToolError};
use crate::repos::{RepoKind, RepoPaths};
use crate::search::CodeSearcher;
use crate::sources::read_source;

pub(super) async fn search_code(
    repos: &RepoPaths,
    searcher: &dyn CodeSearcher,
    request: SearchCodeRequest,
) -> String {
    let scope = request.repo.unwrap_or_default();

    let mut out = format!("Searching for: {}\n\n", request.query);
    for kind in scope.repos() {
        out.push_str(&format!("## {}\n\n", kind.display_name()));
        match searcher.search(&request.query, repos.path(kind)).await {
            Some(matches) => {
                out.push_str(&matches);
                out.push('\n');
            }
            None => out.push_str("No matches found\n\n"),
        }
    }
    out
}

pub(super) async fn compare_implementations(repos: &RepoPaths, feature: &str) -> Result<String> {
    let sources = catalog::feature_sources(feature)
        .ok_or_else(|| ToolError::UnknownFeature(feature.to_string()))?;

    let mut out = format!("# Comparing: {feature}\n\n");
    out.push_str(
        &render_source(
            "JavaScript",
            "typescript",
            repos.path(RepoKind::Js),
            sources.js_path,
        )
        .await,
    );
    out.push_str(&render_source("Go", "go", repos.path(RepoKind::Go), sources.go_path).await);
    Ok(out)
}

async fn render_source(label: &str, fence: &str, repo_root: &Path, relative: &str) -> String {
    match read_source(&repo_root.join(relative)).await {
        Some(content) => format!("## {label} ({relative})\n\n```{fence}\n{content}\n```\n\n"),
        None => format!("## {label} ({relative})\nFile not found\n\n"),
    }
}

pub(super) fn get_auth_example(request: GetAuthExampleRequest) -> String {
    let language = request.language.unwrap_or_default();
    catalog::auth_example_placeholder(request.auth_type.as_str(), language.as_str())
}

pub(super) fn list_features(request: ListFeaturesRequest) -> String {
    // The category is advertised but the inventory is served whole.
    log::debug!(
        "list_features category={:?}",
        request.category.unwrap_or_default()
    );
    catalog::FEATURE_LIST.to_string()
}

pub(super) fn check_parity() -> String {
    catalog::PARITY_REPORT.to_string()
}
