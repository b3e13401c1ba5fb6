//! Serve command - runs the MCP server on stdio.

use anyhow::Result;
use clap::Args;
use kit_mcp::{McpServer, ServerInfo, ToolDispatcher};

use super::Context;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server name reported to hosts
    #[arg(long, default_value = "mcp-kit")]
    pub name: String,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            name: ServerInfo::default().name,
        }
    }
}

/// Run the serve command.
pub async fn run(args: ServeArgs, ctx: &Context) -> Result<()> {
    let dispatcher = ToolDispatcher::new(ctx.client()?)?;
    let info = ServerInfo {
        name: args.name,
        ..ServerInfo::default()
    };

    McpServer::new(dispatcher).with_info(info).serve_stdio().await?;
    tracing::info!("stdin closed, shutting down");
    Ok(())
}
