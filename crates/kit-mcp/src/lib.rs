//! MCP (Model Context Protocol) server exposing the Kit API as tools.
//!
//! Each of the 29 tools maps validated arguments onto exactly one
//! [`kit_client`] call and wraps the outcome in a text result envelope.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  McpServer                                                  │
//! │  - Newline-delimited JSON-RPC 2.0 over stdio                │
//! │  - initialize, ping, tools/list, tools/call                 │
//! └─────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ToolDispatcher / ToolRegistry                              │
//! │  - Schema validation of arguments (schemars + jsonschema)   │
//! │  - Result and error envelopes                               │
//! └─────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  KitClient (kit-client crate)                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use kit_client::KitClient;
//! use kit_mcp::{McpServer, ToolDispatcher};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KitClient::new("kit_api_key")?;
//! let dispatcher = ToolDispatcher::new(client)?;
//!
//! // One-off call, no transport involved
//! let result = dispatcher
//!     .invoke("kit_list_tags", Some(serde_json::json!({"per_page": 10})))
//!     .await;
//! println!("{}", result.text());
//!
//! // Or serve a host over stdio
//! McpServer::new(dispatcher).serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod tool;
pub mod tools;

pub use dispatch::ToolDispatcher;
pub use error::{McpError, Result, ToolError};
pub use protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcMessage, JsonRpcResponse, ListToolsResult, RequestId, ServerCapabilities, ServerInfo,
    ToolContent, ToolInfo, ToolsCapability,
};
pub use registry::ToolRegistry;
pub use server::McpServer;
pub use tool::{DynTool, KitTool, SchemaTool};
