//! Tool declarations, one module per Kit resource.
//!
//! Each tool maps its validated input onto exactly one client call. Any
//! reshaping of arguments lives in a plain function or `From` impl next to
//! the input type so it can be tested without a server.

mod account;
mod broadcasts;
mod custom_fields;
mod forms;
mod sequences;
mod subscribers;
mod tags;
mod webhooks;

use kit_client::PageQuery;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::registry::ToolRegistry;

pub use account::GetAccount;
pub use broadcasts::{
    BroadcastIdInput, CreateBroadcast, CreateBroadcastInput, DeleteBroadcast, GetBroadcast,
    ListBroadcasts, UpdateBroadcast, UpdateBroadcastInput,
};
pub use custom_fields::ListCustomFields;
pub use forms::{
    AddSubscriberToForm, AddSubscriberToFormInput, FormIdInput, GetForm, ListForms, ListFormsInput,
};
pub use sequences::{
    AddSubscriberToSequence, AddSubscriberToSequenceInput, GetSequence, ListSequences,
    SequenceIdInput,
};
pub use subscribers::{
    AddTagToSubscriber, CreateSubscriber, CreateSubscriberInput, GetSubscriber, GetSubscriberTags,
    ListSubscribers, ListSubscribersInput, RemoveTagFromSubscriber, UpdateSubscriber,
    UpdateSubscriberInput,
};
pub use tags::{CreateTag, DeleteTag, GetTag, ListTagSubscribers, ListTags, UpdateTag};
pub use webhooks::{CreateWebhook, CreateWebhookInput, DeleteWebhook, ListWebhooks, WebhookIdInput};

/// Input of tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoArguments {}

/// Cursor pagination arguments shared by list tools.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PageInput {
    /// Number of results per page
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Cursor for pagination - get results after this cursor
    #[serde(default)]
    pub after: Option<String>,
    /// Cursor for pagination - get results before this cursor
    #[serde(default)]
    pub before: Option<String>,
}

impl From<PageInput> for PageQuery {
    fn from(input: PageInput) -> Self {
        PageQuery {
            per_page: input.per_page,
            after: input.after,
            before: input.before,
        }
    }
}

/// Payload returned by delete-style tools, whose upstream response is empty.
pub(crate) fn confirmation(message: &str) -> Value {
    json!({ "success": true, "message": message })
}

/// Register every Kit tool, in catalogue order.
pub fn register_all(registry: &mut ToolRegistry) -> Result<(), ToolError> {
    registry.register(GetAccount)?;

    registry.register(ListSubscribers)?;
    registry.register(GetSubscriber)?;
    registry.register(CreateSubscriber)?;
    registry.register(UpdateSubscriber)?;
    registry.register(GetSubscriberTags)?;
    registry.register(AddTagToSubscriber)?;
    registry.register(RemoveTagFromSubscriber)?;

    registry.register(ListTags)?;
    registry.register(GetTag)?;
    registry.register(CreateTag)?;
    registry.register(UpdateTag)?;
    registry.register(DeleteTag)?;
    registry.register(ListTagSubscribers)?;

    registry.register(ListSequences)?;
    registry.register(GetSequence)?;
    registry.register(AddSubscriberToSequence)?;

    registry.register(ListBroadcasts)?;
    registry.register(GetBroadcast)?;
    registry.register(CreateBroadcast)?;
    registry.register(UpdateBroadcast)?;
    registry.register(DeleteBroadcast)?;

    registry.register(ListForms)?;
    registry.register(GetForm)?;
    registry.register(AddSubscriberToForm)?;

    registry.register(ListCustomFields)?;

    registry.register(ListWebhooks)?;
    registry.register(CreateWebhook)?;
    registry.register(DeleteWebhook)?;

    Ok(())
}
