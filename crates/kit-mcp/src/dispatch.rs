//! Tool dispatch: turn a tool name and raw arguments into a result envelope.

use std::sync::Arc;

use kit_client::KitClient;
use serde_json::Value;

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolInfo};
use crate::registry::ToolRegistry;

/// Routes tool invocations to the Kit client.
///
/// Cheap to clone; the client and registry are shared.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    client: KitClient,
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Dispatcher over the full Kit catalogue.
    pub fn new(client: KitClient) -> Result<Self, ToolError> {
        Ok(Self::with_registry(client, ToolRegistry::kit()?))
    }

    /// Dispatcher over a custom registry.
    pub fn with_registry(client: KitClient, registry: ToolRegistry) -> Self {
        Self {
            client,
            registry: Arc::new(registry),
        }
    }

    /// The client requests go through.
    pub fn client(&self) -> &KitClient {
        &self.client
    }

    /// The registry tools are looked up in.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Listing entries for tools/list.
    pub fn tools(&self) -> Vec<ToolInfo> {
        self.registry.list()
    }

    /// Invoke a tool by name.
    ///
    /// Never fails: unknown tools, invalid arguments and Kit API errors all
    /// come back as an error envelope.
    pub async fn invoke(&self, name: &str, arguments: Option<Value>) -> CallToolResult {
        let result = match self.try_invoke(name, arguments).await {
            Ok(payload) => CallToolResult::json(&payload).unwrap_or_else(|e| CallToolResult::error(e)),
            Err(e) => CallToolResult::error(e),
        };

        if result.is_error() {
            tracing::warn!(tool = name, error = %result.text(), "tool call failed");
        } else {
            tracing::debug!(tool = name, "tool call succeeded");
        }
        result
    }

    /// Invoke a tool by name, keeping the error typed.
    pub async fn try_invoke(&self, name: &str, arguments: Option<Value>) -> Result<Value, ToolError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.invoke(&self.client, arguments.unwrap_or(Value::Null))
            .await
    }
}
