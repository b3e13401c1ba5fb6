//! Account API.

use serde_json::Value;

use crate::client::KitClient;
use crate::error::Result;

/// Account API client.
pub struct AccountApi {
    client: KitClient,
}

impl AccountApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// Get the account the API key belongs to.
    pub async fn get(&self) -> Result<Value> {
        self.client.get("account").await
    }
}
