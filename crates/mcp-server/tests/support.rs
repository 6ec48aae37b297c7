#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RunningService, Service, ServiceExt},
    transport::TokioChildProcess,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_server_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_quickbase-personal-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` -> `.../target/{debug|release}/quickbase-personal-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("quickbase-personal-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in [
        "target/debug/quickbase-personal-mcp",
        "target/release/quickbase-personal-mcp",
    ] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "failed to locate quickbase-personal-mcp binary; build with: cargo build -p quickbase-personal-mcp"
    )
}

/// Spawns the server with `home` as its home directory.
pub async fn start_mcp_server(
    home: &Path,
) -> Result<RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>> {
    let bin = locate_server_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("HOME", home);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("start MCP server")
}

pub async fn call_tool(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(30),
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling tool")?
    .context("call tool")
}

pub fn result_text(result: &CallToolResult) -> Result<String> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .context("tool did not return text content")
}

/// Calls a tool that is expected to succeed and returns its text.
pub async fn call_tool_text(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<String> {
    let result = call_tool(service, name, args).await?;
    assert_ne!(result.is_error, Some(true), "{name} returned error");
    result_text(&result)
}

/// Calls a tool that is expected to answer with an error result and returns the error text.
pub async fn call_tool_error(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<String> {
    let result = call_tool(service, name, args).await?;
    assert_eq!(result.is_error, Some(true), "{name} unexpectedly succeeded");
    result_text(&result)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().context("file path has no parent")?;
    std::fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
    std::fs::write(path, content).with_context(|| format!("write {}", path.display()))
}
