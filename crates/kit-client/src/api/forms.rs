//! Forms API.

use serde::Serialize;
use serde_json::Value;

use crate::client::KitClient;
use crate::error::Result;
use crate::types::{FormSubscriberFields, ListFormsQuery};

/// Body for adding a subscriber to a form: the email first, then the extras.
#[derive(Serialize)]
struct FormSubscriberBody<'a> {
    email_address: &'a str,
    #[serde(flatten)]
    extra: &'a FormSubscriberFields,
}

/// Forms API client.
pub struct FormsApi {
    client: KitClient,
}

impl FormsApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List one page of forms.
    pub async fn list(&self, query: &ListFormsQuery) -> Result<Value> {
        self.client.get_with_query("forms", query).await
    }

    /// Get a form by ID.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("forms/{}", id)).await
    }

    /// Add a subscriber to a form, creating the subscriber if needed.
    pub async fn add_subscriber(
        &self,
        id: &str,
        email: &str,
        extra: &FormSubscriberFields,
    ) -> Result<Value> {
        let body = FormSubscriberBody {
            email_address: email,
            extra,
        };
        self.client
            .post(&format!("forms/{}/subscribers", id), &body)
            .await
    }
}
