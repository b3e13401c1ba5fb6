//! Call command - invokes one tool outside of an MCP session.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use kit_mcp::ToolDispatcher;
use serde_json::Value;

use super::Context;

/// Arguments for the call command.
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name (e.g. kit_list_tags)
    pub tool: String,

    /// Tool arguments as a JSON object
    pub arguments: Option<String>,
}

/// Run the call command.
///
/// Prints the result envelope; exits non-zero when it is an error envelope.
pub async fn run(args: CallArgs, ctx: &Context) -> Result<()> {
    let arguments = args
        .arguments
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("invalid JSON arguments")?;

    let dispatcher = ToolDispatcher::new(ctx.client()?)?;
    let result = dispatcher.invoke(&args.tool, arguments).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    if result.is_error() {
        bail!("tool '{}' returned an error", args.tool);
    }
    Ok(())
}
