//! MCP command implementation.

use crate::mcp::McpServer;
use anyhow::Result;

/// Run the MCP server.
pub async fn run_mcp() -> Result<()> {
    let mut server = McpServer::new();
    server.run().await
}
