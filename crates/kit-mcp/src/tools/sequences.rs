//! Sequence tools.

use async_trait::async_trait;
use kit_client::KitClient;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::PageInput;
use crate::tool::KitTool;

/// Arguments naming one sequence.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SequenceIdInput {
    /// The sequence ID
    pub sequence_id: String,
}

/// Arguments of `kit_add_subscriber_to_sequence`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddSubscriberToSequenceInput {
    /// The sequence ID
    pub sequence_id: String,
    /// The subscriber's email address
    #[schemars(email)]
    pub email: String,
}

/// `kit_list_sequences`
pub struct ListSequences;

#[async_trait]
impl KitTool for ListSequences {
    type Input = PageInput;

    fn name(&self) -> &'static str {
        "kit_list_sequences"
    }

    fn description(&self) -> &'static str {
        "List all email sequences in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.sequences().list(&input.into()).await
    }
}

/// `kit_get_sequence`
pub struct GetSequence;

#[async_trait]
impl KitTool for GetSequence {
    type Input = SequenceIdInput;

    fn name(&self) -> &'static str {
        "kit_get_sequence"
    }

    fn description(&self) -> &'static str {
        "Get a specific sequence by ID"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.sequences().get(&input.sequence_id).await
    }
}

/// `kit_add_subscriber_to_sequence`
pub struct AddSubscriberToSequence;

#[async_trait]
impl KitTool for AddSubscriberToSequence {
    type Input = AddSubscriberToSequenceInput;

    fn name(&self) -> &'static str {
        "kit_add_subscriber_to_sequence"
    }

    fn description(&self) -> &'static str {
        "Add a subscriber to an email sequence"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client
            .sequences()
            .add_subscriber(&input.sequence_id, &input.email)
            .await
    }
}
