//! Webhooks API.
//!
//! Only registration is proxied; deliveries go straight to the target URL.

use serde_json::Value;

use crate::client::KitClient;
use crate::error::Result;
use crate::types::{CreateWebhookRequest, PageQuery};

/// Webhooks API client.
pub struct WebhooksApi {
    client: KitClient,
}

impl WebhooksApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List one page of webhooks.
    pub async fn list(&self, query: &PageQuery) -> Result<Value> {
        self.client.get_with_query("webhooks", query).await
    }

    /// Register a webhook.
    pub async fn create(&self, request: &CreateWebhookRequest) -> Result<Value> {
        self.client.post("webhooks", request).await
    }

    /// Delete a webhook.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("webhooks/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use crate::api::test_support::mock_client;
    use crate::types::{CreateWebhookRequest, WebhookEvent};

    #[tokio::test]
    async fn test_create_nests_event() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .and(body_json(json!({
                "target_url": "https://hooks.example.com/kit",
                "event": {"name": "subscriber.tag_add", "tag_id": "12"}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"webhook": {"id": 9}})))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateWebhookRequest {
            target_url: "https://hooks.example.com/kit".to_string(),
            event: WebhookEvent {
                name: "subscriber.tag_add".to_string(),
                tag_id: Some("12".to_string()),
                ..Default::default()
            },
        };
        client.webhooks().create(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete() {
        let (server, client) = mock_client().await;
        Mock::given(method("DELETE"))
            .and(path("/webhooks/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client.webhooks().delete("9").await.unwrap();
    }
}
