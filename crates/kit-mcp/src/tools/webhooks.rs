//! Webhook registration tools.

use async_trait::async_trait;
use kit_client::{CreateWebhookRequest, KitClient, WebhookEvent};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::{confirmation, PageInput};
use crate::tool::KitTool;

/// Arguments of `kit_create_webhook`, flat as the host sees them.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWebhookInput {
    /// The URL to receive webhook events
    #[schemars(url)]
    pub target_url: String,
    /// The event name (e.g., subscriber.subscriber_activate)
    pub event_name: String,
    /// Tag ID for tag-specific events
    #[serde(default)]
    pub tag_id: Option<String>,
    /// Form ID for form-specific events
    #[serde(default)]
    pub form_id: Option<String>,
    /// Sequence ID for sequence-specific events
    #[serde(default)]
    pub sequence_id: Option<String>,
    /// Product ID for purchase-specific events
    #[serde(default)]
    pub product_id: Option<String>,
}

impl From<CreateWebhookInput> for CreateWebhookRequest {
    fn from(input: CreateWebhookInput) -> Self {
        CreateWebhookRequest {
            target_url: input.target_url,
            event: WebhookEvent {
                name: input.event_name,
                tag_id: input.tag_id,
                form_id: input.form_id,
                sequence_id: input.sequence_id,
                product_id: input.product_id,
            },
        }
    }
}

/// Arguments naming one webhook.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebhookIdInput {
    /// The webhook ID
    pub webhook_id: String,
}

/// `kit_list_webhooks`
pub struct ListWebhooks;

#[async_trait]
impl KitTool for ListWebhooks {
    type Input = PageInput;

    fn name(&self) -> &'static str {
        "kit_list_webhooks"
    }

    fn description(&self) -> &'static str {
        "List all webhooks configured in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.webhooks().list(&input.into()).await
    }
}

/// `kit_create_webhook`
pub struct CreateWebhook;

#[async_trait]
impl KitTool for CreateWebhook {
    type Input = CreateWebhookInput;

    fn name(&self) -> &'static str {
        "kit_create_webhook"
    }

    fn description(&self) -> &'static str {
        "Create a new webhook in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.webhooks().create(&input.into()).await
    }
}

/// `kit_delete_webhook`
pub struct DeleteWebhook;

#[async_trait]
impl KitTool for DeleteWebhook {
    type Input = WebhookIdInput;

    fn name(&self) -> &'static str {
        "kit_delete_webhook"
    }

    fn description(&self) -> &'static str {
        "Delete a webhook from Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.webhooks().delete(&input.webhook_id).await?;
        Ok(confirmation("Webhook deleted"))
    }
}
