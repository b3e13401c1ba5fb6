//! Broadcast tools.

use async_trait::async_trait;
use kit_client::{CreateBroadcastRequest, KitClient, UpdateBroadcastRequest};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::{confirmation, PageInput};
use crate::tool::KitTool;

/// Arguments naming one broadcast.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BroadcastIdInput {
    /// The broadcast ID
    pub broadcast_id: String,
}

/// Arguments of `kit_create_broadcast`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateBroadcastInput {
    /// The email subject line
    pub subject: String,
    /// The email content (HTML supported)
    #[serde(default)]
    pub content: Option<String>,
    /// Internal description for the broadcast
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the broadcast should be public
    #[serde(default)]
    pub public: Option<bool>,
    /// Preview text shown in email clients
    #[serde(default)]
    pub preview_text: Option<String>,
    /// ISO date when to send the broadcast
    #[serde(default)]
    pub send_at: Option<String>,
    /// ISO date the broadcast is published on the web
    #[serde(default)]
    pub published_at: Option<String>,
    /// ID of the email template to use
    #[serde(default)]
    pub email_template_id: Option<String>,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Alt text for the thumbnail image
    #[serde(default)]
    pub thumbnail_alt: Option<String>,
}

impl From<CreateBroadcastInput> for CreateBroadcastRequest {
    fn from(input: CreateBroadcastInput) -> Self {
        CreateBroadcastRequest {
            subject: input.subject,
            content: input.content,
            description: input.description,
            public: input.public,
            published_at: input.published_at,
            send_at: input.send_at,
            email_template_id: input.email_template_id,
            thumbnail_alt: input.thumbnail_alt,
            thumbnail_url: input.thumbnail_url,
            preview_text: input.preview_text,
        }
    }
}

/// Arguments of `kit_update_broadcast`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateBroadcastInput {
    /// The broadcast ID to update
    pub broadcast_id: String,
    /// New subject line
    #[serde(default)]
    pub subject: Option<String>,
    /// New content
    #[serde(default)]
    pub content: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the broadcast should be public
    #[serde(default)]
    pub public: Option<bool>,
    /// New preview text
    #[serde(default)]
    pub preview_text: Option<String>,
    /// New send time (ISO date)
    #[serde(default)]
    pub send_at: Option<String>,
    /// New web publish date (ISO date)
    #[serde(default)]
    pub published_at: Option<String>,
    /// New email template ID
    #[serde(default)]
    pub email_template_id: Option<String>,
    /// New thumbnail image URL
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// New thumbnail alt text
    #[serde(default)]
    pub thumbnail_alt: Option<String>,
}

impl UpdateBroadcastInput {
    /// Split into the path ID and the request body.
    pub fn into_parts(self) -> (String, UpdateBroadcastRequest) {
        (
            self.broadcast_id,
            UpdateBroadcastRequest {
                subject: self.subject,
                content: self.content,
                description: self.description,
                public: self.public,
                published_at: self.published_at,
                send_at: self.send_at,
                email_template_id: self.email_template_id,
                thumbnail_alt: self.thumbnail_alt,
                thumbnail_url: self.thumbnail_url,
                preview_text: self.preview_text,
            },
        )
    }
}

/// `kit_list_broadcasts`
pub struct ListBroadcasts;

#[async_trait]
impl KitTool for ListBroadcasts {
    type Input = PageInput;

    fn name(&self) -> &'static str {
        "kit_list_broadcasts"
    }

    fn description(&self) -> &'static str {
        "List all broadcasts (email campaigns) in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.broadcasts().list(&input.into()).await
    }
}

/// `kit_get_broadcast`
pub struct GetBroadcast;

#[async_trait]
impl KitTool for GetBroadcast {
    type Input = BroadcastIdInput;

    fn name(&self) -> &'static str {
        "kit_get_broadcast"
    }

    fn description(&self) -> &'static str {
        "Get a specific broadcast by ID"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.broadcasts().get(&input.broadcast_id).await
    }
}

/// `kit_create_broadcast`
pub struct CreateBroadcast;

#[async_trait]
impl KitTool for CreateBroadcast {
    type Input = CreateBroadcastInput;

    fn name(&self) -> &'static str {
        "kit_create_broadcast"
    }

    fn description(&self) -> &'static str {
        "Create a new broadcast (email campaign) in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.broadcasts().create(&input.into()).await
    }
}

/// `kit_update_broadcast`
pub struct UpdateBroadcast;

#[async_trait]
impl KitTool for UpdateBroadcast {
    type Input = UpdateBroadcastInput;

    fn name(&self) -> &'static str {
        "kit_update_broadcast"
    }

    fn description(&self) -> &'static str {
        "Update an existing broadcast"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        let (id, request) = input.into_parts();
        client.broadcasts().update(&id, &request).await
    }
}

/// `kit_delete_broadcast`
pub struct DeleteBroadcast;

#[async_trait]
impl KitTool for DeleteBroadcast {
    type Input = BroadcastIdInput;

    fn name(&self) -> &'static str {
        "kit_delete_broadcast"
    }

    fn description(&self) -> &'static str {
        "Delete a broadcast from Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.broadcasts().delete(&input.broadcast_id).await?;
        Ok(confirmation("Broadcast deleted"))
    }
}
