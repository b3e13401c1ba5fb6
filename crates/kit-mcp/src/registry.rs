//! Tool registry: the ordered catalogue of tools served over MCP.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ToolError;
use crate::protocol::ToolInfo;
use crate::tool::{DynTool, KitTool, SchemaTool};
use crate::tools;

/// Ordered set of tools, looked up by name.
///
/// Registration order is the order hosts see in `tools/list`.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn DynTool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full Kit catalogue.
    pub fn kit() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        tools::register_all(&mut registry)?;
        tracing::debug!(count = registry.len(), "registered kit tools");
        Ok(registry)
    }

    /// Compile a tool's schema and add it.
    pub fn register<T: KitTool>(&mut self, tool: T) -> Result<(), ToolError> {
        let name = tool.name();
        if self.by_name.contains_key(name) {
            return Err(ToolError::Duplicate(name.to_string()));
        }

        let tool = SchemaTool::new(tool)?;
        self.by_name.insert(name.to_string(), self.tools.len());
        self.tools.push(Arc::new(tool));
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn DynTool>> {
        self.by_name.get(name).map(|&i| Arc::clone(&self.tools[i]))
    }

    /// Check whether a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Listing entries in registration order.
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(|t| t.info()).collect()
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{GetAccount, ListTags};

    const CATALOGUE: &[&str] = &[
        "kit_get_account",
        "kit_list_subscribers",
        "kit_get_subscriber",
        "kit_create_subscriber",
        "kit_update_subscriber",
        "kit_get_subscriber_tags",
        "kit_add_tag_to_subscriber",
        "kit_remove_tag_from_subscriber",
        "kit_list_tags",
        "kit_get_tag",
        "kit_create_tag",
        "kit_update_tag",
        "kit_delete_tag",
        "kit_list_tag_subscribers",
        "kit_list_sequences",
        "kit_get_sequence",
        "kit_add_subscriber_to_sequence",
        "kit_list_broadcasts",
        "kit_get_broadcast",
        "kit_create_broadcast",
        "kit_update_broadcast",
        "kit_delete_broadcast",
        "kit_list_forms",
        "kit_get_form",
        "kit_add_subscriber_to_form",
        "kit_list_custom_fields",
        "kit_list_webhooks",
        "kit_create_webhook",
        "kit_delete_webhook",
    ];

    #[test]
    fn test_kit_catalogue_order() {
        let registry = ToolRegistry::kit().unwrap();
        assert_eq!(registry.len(), 29);
        assert_eq!(registry.names(), CATALOGUE);
    }

    #[test]
    fn test_every_schema_is_an_object() {
        let registry = ToolRegistry::kit().unwrap();
        for info in registry.list() {
            assert_eq!(info.input_schema["type"], "object", "{}", info.name);
            assert!(!info.description.is_empty(), "{}", info.name);
        }
    }

    #[test]
    fn test_required_fields() {
        let registry = ToolRegistry::kit().unwrap();
        let required = |name: &str| {
            registry.get(name).unwrap().info().input_schema["required"].clone()
        };

        assert_eq!(required("kit_get_tag"), serde_json::json!(["tag_id"]));
        assert_eq!(
            required("kit_create_subscriber"),
            serde_json::json!(["email_address"])
        );
        assert_eq!(
            required("kit_create_webhook"),
            serde_json::json!(["target_url", "event_name"])
        );
        assert!(required("kit_list_tags").is_null());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(ListTags).unwrap();
        let err = registry.register(ListTags).unwrap_err();
        assert!(matches!(err, ToolError::Duplicate(name) if name == "kit_list_tags"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(GetAccount).unwrap();
        assert!(registry.contains("kit_get_account"));
        assert!(registry.get("kit_get_account").is_some());
        assert!(registry.get("kit_nope").is_none());
    }
}
