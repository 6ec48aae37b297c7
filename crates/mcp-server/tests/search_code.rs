use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

mod support;

fn ripgrep_available() -> bool {
    std::process::Command::new("rg")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn seed_repos(home: &Path) -> Result<()> {
    support::write_file(
        &home.join("Projects/Personal/quickbase-js/src/auth/ticket.ts"),
        "export const TICKET_HOURS = 12;\n",
    )?;
    support::write_file(
        &home.join("Projects/Personal/quickbase-tree/quickbase-go/auth/ticket.go"),
        "package auth\n\nconst TicketHours = 12\n",
    )?;
    support::write_file(
        &home.join("Projects/Personal/quickbase-spec/openapi.yaml"),
        "openapi: 3.0.0\n",
    )
}

#[tokio::test]
async fn unmatched_query_reports_no_matches_per_repo() -> Result<()> {
    let home = tempfile::tempdir().context("tempdir")?;
    seed_repos(home.path())?;
    let service = support::start_mcp_server(home.path()).await?;

    let text = support::call_tool_text(
        &service,
        "search_code",
        json!({"query": "zz_nothing_matches_this_zz"}),
    )
    .await?;

    assert_eq!(
        text,
        "Searching for: zz_nothing_matches_this_zz\n\n\
         ## quickbase-js\n\nNo matches found\n\n\
         ## quickbase-go\n\nNo matches found\n\n\
         ## quickbase-spec\n\nNo matches found\n\n"
    );

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn repo_filter_limits_sections() -> Result<()> {
    let home = tempfile::tempdir().context("tempdir")?;
    seed_repos(home.path())?;
    let service = support::start_mcp_server(home.path()).await?;

    let text = support::call_tool_text(
        &service,
        "search_code",
        json!({"query": "zz_nothing_matches_this_zz", "repo": "spec"}),
    )
    .await?;
    assert!(text.contains("## quickbase-spec"));
    assert!(!text.contains("## quickbase-js") && !text.contains("## quickbase-go"));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn matches_are_line_numbered_under_their_repo() -> Result<()> {
    if !ripgrep_available() {
        eprintln!("skipping: rg not on PATH");
        return Ok(());
    }

    let home = tempfile::tempdir().context("tempdir")?;
    seed_repos(home.path())?;
    let service = support::start_mcp_server(home.path()).await?;

    let text = support::call_tool_text(
        &service,
        "search_code",
        json!({"query": "TicketHours", "repo": "all"}),
    )
    .await?;

    let go_section = text
        .split("## quickbase-go\n\n")
        .nth(1)
        .context("missing go section")?;
    assert!(
        go_section.contains("auth/ticket.go:3:const TicketHours = 12"),
        "{text}"
    );
    assert!(text.contains("## quickbase-js\n\nNo matches found\n\n"));
    assert!(text.contains("## quickbase-spec\n\nNo matches found\n\n"));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
