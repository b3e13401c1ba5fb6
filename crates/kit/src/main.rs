//! kit-mcp - Kit email marketing API as MCP tools
//!
//! Main entry point for the kit-mcp binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{call, serve, tools};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// kit-mcp - Kit email marketing API as MCP tools
#[derive(Parser)]
#[command(name = "kit-mcp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.config/kit-mcp/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Kit API base URL (default: https://api.kit.com/v4)
    #[arg(long, global = true, env = "KIT_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio (default)
    Serve(serve::ServeArgs),

    /// Print the tool catalogue
    Tools(tools::ToolsArgs),

    /// Invoke a single tool and print its result
    Call(call::CallArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = kit_config::load_config(cli.config.as_deref())?;
    let _guard = commands::init_logging(cli.verbose, &loaded.config.logging);

    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }
    if loaded.loaded
        && let Some(path) = &loaded.path
    {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let ctx = commands::Context {
        config: loaded.config,
        base_url: cli.base_url,
    };

    match cli.command {
        None => serve::run(serve::ServeArgs::default(), &ctx).await,
        Some(Commands::Serve(args)) => serve::run(args, &ctx).await,
        Some(Commands::Tools(args)) => tools::run(args, &ctx).await,
        Some(Commands::Call(args)) => call::run(args, &ctx).await,
    }
}
