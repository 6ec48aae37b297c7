use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    quickbase_mcp::main_entry().await
}
