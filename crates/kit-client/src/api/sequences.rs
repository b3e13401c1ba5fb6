//! Sequences API.

use serde_json::{json, Value};

use crate::client::KitClient;
use crate::error::Result;
use crate::types::PageQuery;

/// Sequences API client.
pub struct SequencesApi {
    client: KitClient,
}

impl SequencesApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List one page of sequences.
    pub async fn list(&self, query: &PageQuery) -> Result<Value> {
        self.client.get_with_query("sequences", query).await
    }

    /// Get a sequence by ID.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("sequences/{}", id)).await
    }

    /// Add a subscriber to a sequence by email address.
    pub async fn add_subscriber(&self, id: &str, email: &str) -> Result<Value> {
        self.client
            .post(
                &format!("sequences/{}/subscribers", id),
                &json!({ "email_address": email }),
            )
            .await
    }
}
