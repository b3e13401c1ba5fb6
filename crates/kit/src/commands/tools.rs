//! Tools command - prints the tool catalogue.

use anyhow::Result;
use clap::Args;
use kit_mcp::ToolRegistry;

use super::Context;

/// Arguments for the tools command.
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Print only tool names, one per line
    #[arg(long)]
    pub names: bool,
}

/// Run the tools command. Needs no API key.
pub async fn run(args: ToolsArgs, _ctx: &Context) -> Result<()> {
    let registry = ToolRegistry::kit()?;

    if args.names {
        for name in registry.names() {
            println!("{}", name);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&registry.list())?);
    }
    Ok(())
}
