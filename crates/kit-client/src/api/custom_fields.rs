//! Custom fields API.

use serde_json::Value;

use crate::client::KitClient;
use crate::error::Result;

/// Custom fields API client.
pub struct CustomFieldsApi {
    client: KitClient,
}

impl CustomFieldsApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List all custom fields defined on the account.
    pub async fn list(&self) -> Result<Value> {
        self.client.get("custom_fields").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use crate::api::test_support::mock_client;

    #[tokio::test]
    async fn test_list_custom_fields() {
        let (server, client) = mock_client().await;
        let body = json!({"custom_fields": [{"id": 1, "key": "last_name", "label": "Last name"}]});
        Mock::given(method("GET"))
            .and(path("/custom_fields"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client.custom_fields().list().await.unwrap(), body);
    }
}
