use rmcp::schemars;
use serde::Deserialize;

use crate::repos::RepoKind;

/// Which checkouts `search_code` covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RepoScope {
    Js,
    Go,
    Spec,
    #[default]
    All,
}

impl RepoScope {
    /// Selected repositories, always in js, go, spec order.
    pub fn repos(self) -> Vec<RepoKind> {
        RepoKind::ALL
            .into_iter()
            .filter(|kind| self.includes(*kind))
            .collect()
    }

    fn includes(self, kind: RepoKind) -> bool {
        match self {
            RepoScope::All => true,
            RepoScope::Js => kind == RepoKind::Js,
            RepoScope::Go => kind == RepoKind::Go,
            RepoScope::Spec => kind == RepoKind::Spec,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AuthType {
    UserToken,
    TempToken,
    Sso,
    Ticket,
}

impl AuthType {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthType::UserToken => "user-token",
            AuthType::TempToken => "temp-token",
            AuthType::Sso => "sso",
            AuthType::Ticket => "ticket",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SdkLanguage {
    Js,
    Go,
    #[default]
    Both,
}

impl SdkLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            SdkLanguage::Js => "js",
            SdkLanguage::Go => "go",
            SdkLanguage::Both => "both",
        }
    }
}

/// Advertised filter for `list_features`. The listing itself is not filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Auth,
    Client,
    Pagination,
    #[default]
    All,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchCodeRequest {
    #[schemars(description = "Search query (e.g., 'ticket auth', 'pagination', 'rate limit')")]
    pub query: String,

    #[schemars(description = "Limit to specific repo: 'js', 'go', 'spec', 'all' (default: 'all')")]
    pub repo: Option<RepoScope>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareImplementationsRequest {
    #[schemars(
        description = "Feature to compare (e.g., 'ticket-auth', 'temp-token', 'pagination', 'retry')"
    )]
    pub feature: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetAuthExampleRequest {
    #[schemars(description = "Authentication type: 'user-token', 'temp-token', 'sso', 'ticket'")]
    pub auth_type: AuthType,

    #[schemars(description = "SDK language: 'js', 'go', 'both' (default: 'both')")]
    pub language: Option<SdkLanguage>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListFeaturesRequest {
    #[schemars(
        description = "Feature category: 'auth', 'client', 'pagination', 'all' (default: 'all')"
    )]
    pub category: Option<FeatureCategory>,
}
