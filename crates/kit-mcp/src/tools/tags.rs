//! Tag tools.

use async_trait::async_trait;
use kit_client::{KitClient, PageQuery};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::{confirmation, PageInput};
use crate::tool::KitTool;

/// Arguments naming one tag.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TagIdInput {
    /// The tag ID
    pub tag_id: String,
}

/// Arguments of `kit_create_tag`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTagInput {
    /// The name for the new tag
    pub name: String,
}

/// Arguments of `kit_update_tag`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTagInput {
    /// The tag ID to update
    pub tag_id: String,
    /// The new name for the tag
    pub name: String,
}

/// Arguments of `kit_list_tag_subscribers`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TagSubscribersInput {
    /// The tag ID
    pub tag_id: String,
    /// Number of results per page
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Cursor for pagination
    #[serde(default)]
    pub after: Option<String>,
    /// Cursor for pagination - get results before this cursor
    #[serde(default)]
    pub before: Option<String>,
}

impl TagSubscribersInput {
    /// Split into the path ID and the page query.
    pub fn into_parts(self) -> (String, PageQuery) {
        (
            self.tag_id,
            PageQuery {
                per_page: self.per_page,
                after: self.after,
                before: self.before,
            },
        )
    }
}

/// `kit_list_tags`
pub struct ListTags;

#[async_trait]
impl KitTool for ListTags {
    type Input = PageInput;

    fn name(&self) -> &'static str {
        "kit_list_tags"
    }

    fn description(&self) -> &'static str {
        "List all tags in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.tags().list(&input.into()).await
    }
}

/// `kit_get_tag`
pub struct GetTag;

#[async_trait]
impl KitTool for GetTag {
    type Input = TagIdInput;

    fn name(&self) -> &'static str {
        "kit_get_tag"
    }

    fn description(&self) -> &'static str {
        "Get a specific tag by ID"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.tags().get(&input.tag_id).await
    }
}

/// `kit_create_tag`
pub struct CreateTag;

#[async_trait]
impl KitTool for CreateTag {
    type Input = CreateTagInput;

    fn name(&self) -> &'static str {
        "kit_create_tag"
    }

    fn description(&self) -> &'static str {
        "Create a new tag in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.tags().create(&input.name).await
    }
}

/// `kit_update_tag`
pub struct UpdateTag;

#[async_trait]
impl KitTool for UpdateTag {
    type Input = UpdateTagInput;

    fn name(&self) -> &'static str {
        "kit_update_tag"
    }

    fn description(&self) -> &'static str {
        "Update an existing tag's name"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.tags().update(&input.tag_id, &input.name).await
    }
}

/// `kit_delete_tag`
pub struct DeleteTag;

#[async_trait]
impl KitTool for DeleteTag {
    type Input = TagIdInput;

    fn name(&self) -> &'static str {
        "kit_delete_tag"
    }

    fn description(&self) -> &'static str {
        "Delete a tag from Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.tags().delete(&input.tag_id).await?;
        Ok(confirmation("Tag deleted"))
    }
}

/// `kit_list_tag_subscribers`
pub struct ListTagSubscribers;

#[async_trait]
impl KitTool for ListTagSubscribers {
    type Input = TagSubscribersInput;

    fn name(&self) -> &'static str {
        "kit_list_tag_subscribers"
    }

    fn description(&self) -> &'static str {
        "List all subscribers with a specific tag"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        let (tag_id, query) = input.into_parts();
        client.tags().subscribers(&tag_id, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_subscribers_split() {
        let (tag_id, query) = TagSubscribersInput {
            tag_id: "5".to_string(),
            per_page: Some(10),
            after: None,
            before: Some("WzFd".to_string()),
        }
        .into_parts();
        assert_eq!(tag_id, "5");
        assert_eq!(query.per_page, Some(10));
        assert_eq!(query.before.as_deref(), Some("WzFd"));
    }
}
