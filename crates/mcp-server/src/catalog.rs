//! Compiled-in SDK knowledge: where each feature lives in both SDKs, plus the static reference
//! documents served by `list_features` and `check_parity`.

/// Source locations of one feature, relative to the JS and Go checkouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSources {
    pub key: &'static str,
    pub js_path: &'static str,
    pub go_path: &'static str,
}

pub static FEATURES: &[FeatureSources] = &[
    FeatureSources {
        key: "ticket-auth",
        js_path: "src/auth/ticket.ts",
        go_path: "auth/ticket.go",
    },
    FeatureSources {
        key: "temp-token",
        js_path: "src/auth/temp-token.ts",
        go_path: "auth/temp_token.go",
    },
    FeatureSources {
        key: "user-token",
        js_path: "src/auth/user-token.ts",
        go_path: "auth/user_token.go",
    },
    FeatureSources {
        key: "sso",
        js_path: "src/auth/sso.ts",
        go_path: "auth/sso_token.go",
    },
    FeatureSources {
        key: "pagination",
        js_path: "src/client/pagination.ts",
        go_path: "client/pagination.go",
    },
    FeatureSources {
        key: "retry",
        js_path: "src/client/retry.ts",
        go_path: "client/client.go",
    },
    FeatureSources {
        key: "throttle",
        js_path: "src/client/throttle.ts",
        go_path: "client/throttle.go",
    },
];

/// Exact, case-sensitive lookup.
pub fn feature_sources(key: &str) -> Option<&'static FeatureSources> {
    FEATURES.iter().find(|feature| feature.key == key)
}

pub fn auth_example_placeholder(auth_type: &str, language: &str) -> String {
    format!(
        "Getting {auth_type} auth examples for: {language}\n\n\
         TODO: Implement auth examples"
    )
}

pub const FEATURE_LIST: &str = "\
# QuickBase SDK Features

## Authentication Methods
- ✅ User Token (both JS & Go)
- ✅ Temporary Token (both JS & Go)
- ✅ SSO Token (both JS & Go)
- ✅ Ticket Auth - API_Authenticate (both JS & Go)

## Client Features
- ✅ Retry with exponential backoff (both JS & Go)
- ✅ Rate limiting / throttling (both JS & Go)
- ✅ Automatic date parsing (both JS & Go)
- ✅ Custom error types (both JS & Go)

## Pagination
- ✅ Fluent pagination API (both JS & Go)
- ✅ Auto-pagination (both JS & Go)
- ✅ Manual page iteration (both JS & Go)

## Code Generation
- ✅ TypeScript types from OpenAPI spec (JS)
- ✅ Go types from OpenAPI spec (Go)
- ✅ Shared OpenAPI spec (both)
";

pub const PARITY_REPORT: &str = "\
# Feature Parity Check

## ✅ Complete Parity
- User Token Auth
- Temporary Token Auth
- SSO Token Auth
- Ticket Auth (API_Authenticate)
- Retry logic
- Rate limiting
- Date parsing
- Error handling
- Pagination (fluent API)

## 🔄 Differences
- **Browser support**: JS has browser bundles, Go is server-only
- **Testing**: JS uses Vitest, Go uses native testing
- **Generated code**: Different generators (openapi-generator-typescript vs oapi-codegen)

## 📝 Implementation Notes
- Both SDKs share the same OpenAPI spec via git submodule
- Both follow the same architectural patterns
- Both have identical test fixtures (JSON-based)
- Code structure mirrors between languages

## Version Info
- quickbase-js: v2.1.0
- quickbase-go: v1.2.0
";
