//! Custom field tools.

use async_trait::async_trait;
use kit_client::KitClient;
use serde_json::Value;

use super::NoArguments;
use crate::tool::KitTool;

/// `kit_list_custom_fields`
pub struct ListCustomFields;

#[async_trait]
impl KitTool for ListCustomFields {
    type Input = NoArguments;

    fn name(&self) -> &'static str {
        "kit_list_custom_fields"
    }

    fn description(&self) -> &'static str {
        "List all custom fields defined in Kit.com"
    }

    async fn call(&self, client: &KitClient, _input: NoArguments) -> kit_client::Result<Value> {
        client.custom_fields().list().await
    }
}
