//! Subscriber tools.

use std::collections::BTreeMap;

use async_trait::async_trait;
use kit_client::{
    CreateSubscriberRequest, KitClient, ListSubscribersQuery, SortField, SortOrder,
    SubscriberState, SubscriberStatus, UpdateSubscriberRequest,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::confirmation;
use crate::tool::KitTool;

/// Arguments of `kit_list_subscribers`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSubscribersInput {
    /// Filter by subscriber status
    #[serde(default)]
    pub status: Option<SubscriberStatus>,
    /// Filter subscribers created after this ISO date
    #[serde(default)]
    pub created_after: Option<String>,
    /// Filter subscribers created before this ISO date
    #[serde(default)]
    pub created_before: Option<String>,
    /// Filter subscribers updated after this ISO date
    #[serde(default)]
    pub updated_after: Option<String>,
    /// Filter subscribers updated before this ISO date
    #[serde(default)]
    pub updated_before: Option<String>,
    /// Field to sort by
    #[serde(default)]
    pub sort_field: Option<SortField>,
    /// Sort order
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
    /// Number of results per page (max 100)
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Cursor for pagination - get results after this cursor
    #[serde(default)]
    pub after: Option<String>,
    /// Cursor for pagination - get results before this cursor
    #[serde(default)]
    pub before: Option<String>,
}

impl From<ListSubscribersInput> for ListSubscribersQuery {
    fn from(input: ListSubscribersInput) -> Self {
        ListSubscribersQuery {
            status: input.status,
            created_after: input.created_after,
            created_before: input.created_before,
            updated_after: input.updated_after,
            updated_before: input.updated_before,
            sort_field: input.sort_field,
            sort_order: input.sort_order,
            per_page: input.per_page,
            after: input.after,
            before: input.before,
        }
    }
}

/// Arguments naming one subscriber.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubscriberIdInput {
    /// The subscriber ID
    pub subscriber_id: String,
}

/// Arguments of `kit_create_subscriber`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSubscriberInput {
    /// The subscriber's email address
    #[schemars(email)]
    pub email_address: String,
    /// The subscriber's first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Subscriber state (default: active)
    #[serde(default)]
    pub state: Option<SubscriberState>,
    /// Custom field values as key-value pairs
    #[serde(default)]
    pub fields: Option<BTreeMap<String, String>>,
}

impl From<CreateSubscriberInput> for CreateSubscriberRequest {
    fn from(input: CreateSubscriberInput) -> Self {
        CreateSubscriberRequest {
            email_address: input.email_address,
            first_name: input.first_name,
            state: input.state,
            fields: input.fields,
        }
    }
}

/// Arguments of `kit_update_subscriber`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateSubscriberInput {
    /// The subscriber ID to update
    pub subscriber_id: String,
    /// New email address
    #[serde(default)]
    #[schemars(email)]
    pub email_address: Option<String>,
    /// New first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Custom field values to update
    #[serde(default)]
    pub fields: Option<BTreeMap<String, String>>,
}

impl UpdateSubscriberInput {
    /// Split into the path ID and the request body.
    pub fn into_parts(self) -> (String, UpdateSubscriberRequest) {
        (
            self.subscriber_id,
            UpdateSubscriberRequest {
                email_address: self.email_address,
                first_name: self.first_name,
                fields: self.fields,
            },
        )
    }
}

/// Arguments naming a subscriber and a tag.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubscriberTagInput {
    /// The subscriber ID
    pub subscriber_id: String,
    /// The tag ID
    pub tag_id: String,
}

/// `kit_list_subscribers`
pub struct ListSubscribers;

#[async_trait]
impl KitTool for ListSubscribers {
    type Input = ListSubscribersInput;

    fn name(&self) -> &'static str {
        "kit_list_subscribers"
    }

    fn description(&self) -> &'static str {
        "List subscribers from Kit.com with optional filters. Returns paginated results."
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.subscribers().list(&input.into()).await
    }
}

/// `kit_get_subscriber`
pub struct GetSubscriber;

#[async_trait]
impl KitTool for GetSubscriber {
    type Input = SubscriberIdInput;

    fn name(&self) -> &'static str {
        "kit_get_subscriber"
    }

    fn description(&self) -> &'static str {
        "Get a specific subscriber by ID"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.subscribers().get(&input.subscriber_id).await
    }
}

/// `kit_create_subscriber`
pub struct CreateSubscriber;

#[async_trait]
impl KitTool for CreateSubscriber {
    type Input = CreateSubscriberInput;

    fn name(&self) -> &'static str {
        "kit_create_subscriber"
    }

    fn description(&self) -> &'static str {
        "Create a new subscriber in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.subscribers().create(&input.into()).await
    }
}

/// `kit_update_subscriber`
pub struct UpdateSubscriber;

#[async_trait]
impl KitTool for UpdateSubscriber {
    type Input = UpdateSubscriberInput;

    fn name(&self) -> &'static str {
        "kit_update_subscriber"
    }

    fn description(&self) -> &'static str {
        "Update an existing subscriber"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        let (id, request) = input.into_parts();
        client.subscribers().update(&id, &request).await
    }
}

/// `kit_get_subscriber_tags`
pub struct GetSubscriberTags;

#[async_trait]
impl KitTool for GetSubscriberTags {
    type Input = SubscriberIdInput;

    fn name(&self) -> &'static str {
        "kit_get_subscriber_tags"
    }

    fn description(&self) -> &'static str {
        "Get all tags for a specific subscriber"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.subscribers().tags(&input.subscriber_id).await
    }
}

/// `kit_add_tag_to_subscriber`
pub struct AddTagToSubscriber;

#[async_trait]
impl KitTool for AddTagToSubscriber {
    type Input = SubscriberTagInput;

    fn name(&self) -> &'static str {
        "kit_add_tag_to_subscriber"
    }

    fn description(&self) -> &'static str {
        "Add a tag to a subscriber"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client
            .subscribers()
            .add_tag(&input.subscriber_id, &input.tag_id)
            .await
    }
}

/// `kit_remove_tag_from_subscriber`
pub struct RemoveTagFromSubscriber;

#[async_trait]
impl KitTool for RemoveTagFromSubscriber {
    type Input = SubscriberTagInput;

    fn name(&self) -> &'static str {
        "kit_remove_tag_from_subscriber"
    }

    fn description(&self) -> &'static str {
        "Remove a tag from a subscriber"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client
            .subscribers()
            .remove_tag(&input.subscriber_id, &input.tag_id)
            .await?;
        Ok(confirmation("Tag removed from subscriber"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_input_maps_every_filter() {
        let query: ListSubscribersQuery = ListSubscribersInput {
            status: Some(SubscriberStatus::Active),
            sort_field: Some(SortField::UpdatedAt),
            per_page: Some(100),
            after: Some("WzEwXQ==".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(query.status, Some(SubscriberStatus::Active));
        assert_eq!(query.sort_field, Some(SortField::UpdatedAt));
        assert_eq!(query.per_page, Some(100));
        assert_eq!(query.after.as_deref(), Some("WzEwXQ=="));
        assert_eq!(query.created_after, None);
    }

    #[test]
    fn test_create_input_body_is_verbatim() {
        let request: CreateSubscriberRequest = CreateSubscriberInput {
            email_address: "a@b.com".to_string(),
            first_name: None,
            state: None,
            fields: None,
        }
        .into();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"email_address":"a@b.com"}"#
        );
    }

    #[test]
    fn test_update_input_splits_id_from_body() {
        let (id, request) = UpdateSubscriberInput {
            subscriber_id: "3".to_string(),
            email_address: None,
            first_name: Some("Ada".to_string()),
            fields: Some(BTreeMap::from([("city".to_string(), "London".to_string())])),
        }
        .into_parts();
        assert_eq!(id, "3");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"first_name": "Ada", "fields": {"city": "London"}})
        );
    }
}
