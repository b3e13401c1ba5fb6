//! Subscribers API.

use serde_json::{json, Value};

use crate::client::KitClient;
use crate::error::Result;
use crate::types::{CreateSubscriberRequest, ListSubscribersQuery, UpdateSubscriberRequest};

/// Subscribers API client.
pub struct SubscribersApi {
    client: KitClient,
}

impl SubscribersApi {
    pub(crate) fn new(client: KitClient) -> Self {
        Self { client }
    }

    /// List one page of subscribers.
    pub async fn list(&self, query: &ListSubscribersQuery) -> Result<Value> {
        self.client.get_with_query("subscribers", query).await
    }

    /// Get a subscriber by ID.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("subscribers/{}", id)).await
    }

    /// Create a subscriber.
    pub async fn create(&self, request: &CreateSubscriberRequest) -> Result<Value> {
        self.client.post("subscribers", request).await
    }

    /// Update a subscriber.
    pub async fn update(&self, id: &str, request: &UpdateSubscriberRequest) -> Result<Value> {
        self.client.put(&format!("subscribers/{}", id), request).await
    }

    /// List the tags applied to a subscriber.
    pub async fn tags(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("subscribers/{}/tags", id)).await
    }

    /// Tag a subscriber.
    pub async fn add_tag(&self, id: &str, tag_id: &str) -> Result<Value> {
        self.client
            .post(&format!("subscribers/{}/tags", id), &json!({ "tag_id": tag_id }))
            .await
    }

    /// Remove a tag from a subscriber.
    pub async fn remove_tag(&self, id: &str, tag_id: &str) -> Result<()> {
        self.client
            .delete(&format!("subscribers/{}/tags/{}", id, tag_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    use crate::api::test_support::mock_client;
    use crate::types::{
        CreateSubscriberRequest, ListSubscribersQuery, SortOrder, SubscriberStatus,
        UpdateSubscriberRequest,
    };

    #[tokio::test]
    async fn test_list_serializes_filters_in_order() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/subscribers"))
            .and(query_param("status", "bounced"))
            .and(query_param("sort_order", "desc"))
            .and(query_param("after", "WzEwXQ=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subscribers": []})))
            .expect(1)
            .mount(&server)
            .await;

        let query = ListSubscribersQuery {
            status: Some(SubscriberStatus::Bounced),
            sort_order: Some(SortOrder::Desc),
            after: Some("WzEwXQ==".to_string()),
            ..Default::default()
        };
        client.subscribers().list(&query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("status=bounced&sort_order=desc&after=WzEwXQ%3D%3D")
        );
    }

    #[tokio::test]
    async fn test_list_without_filters_has_no_query_string() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/subscribers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subscribers": []})))
            .mount(&server)
            .await;

        client
            .subscribers()
            .list(&ListSubscribersQuery::default())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_create_posts_only_given_fields() {
        let (server, client) = mock_client().await;
        let created = json!({"subscriber": {"id": 3, "email_address": "a@b.com", "state": "active"}});
        Mock::given(method("POST"))
            .and(path("/subscribers"))
            .and(body_json(json!({"email_address": "a@b.com"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(&created))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateSubscriberRequest {
            email_address: "a@b.com".to_string(),
            ..Default::default()
        };
        assert_eq!(client.subscribers().create(&request).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_uses_put() {
        let (server, client) = mock_client().await;
        Mock::given(method("PUT"))
            .and(path("/subscribers/3"))
            .and(body_json(json!({"first_name": "Ada"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subscriber": {"id": 3}})))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdateSubscriberRequest {
            first_name: Some("Ada".to_string()),
            ..Default::default()
        };
        client.subscribers().update("3", &request).await.unwrap();
    }

    #[tokio::test]
    async fn test_tag_sub_actions() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/subscribers/3/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/subscribers/3/tags"))
            .and(body_json(json!({"tag_id": "12"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tag": {"id": 12}})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/subscribers/3/tags/12"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = client.subscribers();
        assert_eq!(api.tags("3").await.unwrap(), json!({"tags": []}));
        api.add_tag("3", "12").await.unwrap();
        api.remove_tag("3", "12").await.unwrap();
    }
}
