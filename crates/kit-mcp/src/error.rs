//! Error types for the MCP server and tool dispatch.

use thiserror::Error;

/// Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, McpError>;

/// Error type for the stdio server itself.
///
/// Tool failures never surface here; they become error envelopes.
#[derive(Debug, Error)]
pub enum McpError {
    /// Failed to communicate with the host.
    #[error("transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// Why a single tool invocation failed.
///
/// Kept typed inside the crate and collapsed to `"Error: <message>"` text only
/// when the result envelope is built.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's input schema.
    #[error("invalid arguments: {0}")]
    Validation(String),

    /// A tool's declared schema could not be compiled.
    #[error("invalid schema for tool '{tool}': {message}")]
    Schema {
        /// Tool name.
        tool: String,
        /// Compiler message.
        message: String,
    },

    /// A second tool was registered under an existing name.
    #[error("tool '{0}' is already registered")]
    Duplicate(String),

    /// The Kit API call failed (HTTP status, transport, or body parse).
    #[error(transparent)]
    Kit(#[from] kit_client::Error),

    /// The tool's result could not be serialized.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
