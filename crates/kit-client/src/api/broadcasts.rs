//! Broadcasts API.

use serde_json::Value;

use crate::client::KitClient;
use crate::error::Result;
use crate::types::{CreateBroadcastRequest, PageQuery, UpdateBroadcastRequest};

/// Broadcasts API client.
pub struct BroadcastsApi {
    client: KitClient,
}

impl BroadcastsApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List one page of broadcasts.
    pub async fn list(&self, query: &PageQuery) -> Result<Value> {
        self.client.get_with_query("broadcasts", query).await
    }

    /// Get a broadcast by ID.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("broadcasts/{}", id)).await
    }

    /// Create a broadcast.
    pub async fn create(&self, request: &CreateBroadcastRequest) -> Result<Value> {
        self.client.post("broadcasts", request).await
    }

    /// Update a broadcast.
    pub async fn update(&self, id: &str, request: &UpdateBroadcastRequest) -> Result<Value> {
        self.client.put(&format!("broadcasts/{}", id), request).await
    }

    /// Delete a broadcast.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("broadcasts/{}", id)).await
    }
}
