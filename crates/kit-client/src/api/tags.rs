//! Tags API.

use serde_json::{json, Value};

use crate::client::KitClient;
use crate::error::Result;
use crate::types::PageQuery;

/// Tags API client.
pub struct TagsApi {
    client: KitClient,
}

impl TagsApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List one page of tags.
    pub async fn list(&self, query: &PageQuery) -> Result<Value> {
        self.client.get_with_query("tags", query).await
    }

    /// Get a tag by ID.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("tags/{}", id)).await
    }

    /// Create a tag.
    pub async fn create(&self, name: &str) -> Result<Value> {
        self.client.post("tags", &json!({ "name": name })).await
    }

    /// Rename a tag.
    pub async fn update(&self, id: &str, name: &str) -> Result<Value> {
        self.client
            .put(&format!("tags/{}", id), &json!({ "name": name }))
            .await
    }

    /// Delete a tag.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("tags/{}", id)).await
    }

    /// List one page of subscribers carrying a tag.
    pub async fn subscribers(&self, id: &str, query: &PageQuery) -> Result<Value> {
        self.client
            .get_with_query(&format!("tags/{}/subscribers", id), query)
            .await
    }
}
