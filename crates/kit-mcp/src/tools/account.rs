//! Account tools.

use async_trait::async_trait;
use kit_client::KitClient;
use serde_json::Value;

use super::NoArguments;
use crate::tool::KitTool;

/// `kit_get_account`
pub struct GetAccount;

#[async_trait]
impl KitTool for GetAccount {
    type Input = NoArguments;

    fn name(&self) -> &'static str {
        "kit_get_account"
    }

    fn description(&self) -> &'static str {
        "Get information about the Kit.com account"
    }

    async fn call(&self, client: &KitClient, _input: NoArguments) -> kit_client::Result<Value> {
        client.account().get().await
    }
}
