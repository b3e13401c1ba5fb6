//! Form tools.

use std::collections::BTreeMap;

use async_trait::async_trait;
use kit_client::{FormStatus, FormSubscriberFields, KitClient, ListFormsQuery};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::tool::KitTool;

/// Arguments of `kit_list_forms`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListFormsInput {
    /// Filter by form status
    #[serde(default)]
    pub status: Option<FormStatus>,
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

impl From<ListFormsInput> for ListFormsQuery {
    fn from(input: ListFormsInput) -> Self {
        ListFormsQuery {
            status: input.status,
            per_page: input.per_page,
            after: input.after,
            before: input.before,
        }
    }
}

/// Arguments naming one form.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormIdInput {
    /// The form ID
    pub form_id: String,
}

/// Arguments of `kit_add_subscriber_to_form`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddSubscriberToFormInput {
    /// The form ID
    pub form_id: String,
    /// The subscriber's email address
    #[schemars(email)]
    pub email: String,
    /// The subscriber's first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Custom field values
    #[serde(default)]
    pub fields: Option<BTreeMap<String, String>>,
}

impl AddSubscriberToFormInput {
    /// Split into form ID, email, and the extra subscriber details.
    pub fn into_parts(self) -> (String, String, FormSubscriberFields) {
        (
            self.form_id,
            self.email,
            FormSubscriberFields {
                first_name: self.first_name,
                fields: self.fields,
            },
        )
    }
}

/// `kit_list_forms`
pub struct ListForms;

#[async_trait]
impl KitTool for ListForms {
    type Input = ListFormsInput;

    fn name(&self) -> &'static str {
        "kit_list_forms"
    }

    fn description(&self) -> &'static str {
        "List all forms in Kit.com"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.forms().list(&input.into()).await
    }
}

/// `kit_get_form`
pub struct GetForm;

#[async_trait]
impl KitTool for GetForm {
    type Input = FormIdInput;

    fn name(&self) -> &'static str {
        "kit_get_form"
    }

    fn description(&self) -> &'static str {
        "Get a specific form by ID"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        client.forms().get(&input.form_id).await
    }
}

/// `kit_add_subscriber_to_form`
pub struct AddSubscriberToForm;

#[async_trait]
impl KitTool for AddSubscriberToForm {
    type Input = AddSubscriberToFormInput;

    fn name(&self) -> &'static str {
        "kit_add_subscriber_to_form"
    }

    fn description(&self) -> &'static str {
        "Add a subscriber to a form (creates subscriber if doesn't exist)"
    }

    async fn call(&self, client: &KitClient, input: Self::Input) -> kit_client::Result<Value> {
        let (form_id, email, extra) = input.into_parts();
        client.forms().add_subscriber(&form_id, &email, &extra).await
    }
}
