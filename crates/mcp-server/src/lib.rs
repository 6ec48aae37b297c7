//! QuickBase SDK companion MCP server
//!
//! Exposes a handful of developer-convenience tools over MCP (stdio) for working on the
//! QuickBase JavaScript and Go SDKs side by side.
//!
//! ## Tools
//!
//! - `search_code` - ripgrep across the JS SDK, Go SDK and shared spec checkouts
//! - `compare_implementations` - show the JS and Go source of one feature next to each other
//! - `get_auth_example` - auth examples (placeholder)
//! - `list_features` - static feature inventory
//! - `check_parity` - static JS/Go parity report
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "quickbase": {
//!       "command": "quickbase-personal-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod catalog;
pub mod error;
pub mod repos;
pub mod search;
pub mod sources;
mod tools;

pub use tools::QuickbaseService;

pub const SERVER_NAME: &str = "quickbase-personal-mcp";
pub const SERVER_VERSION: &str = "1.0.0";

pub async fn main_entry() -> Result<()> {
    // Logs go to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting {SERVER_NAME} v{SERVER_VERSION}");

    let service = QuickbaseService::new();
    let server = service
        .serve(stdio())
        .await
        .context("failed to start MCP stdio transport")?;

    // Wait for shutdown
    server.waiting().await.context("MCP service task failed")?;

    log::info!("{SERVER_NAME} stopped");
    Ok(())
}
