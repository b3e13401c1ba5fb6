//! Main client implementation.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{
    AccountApi, BroadcastsApi, CustomFieldsApi, FormsApi, SequencesApi, SubscribersApi, TagsApi,
    WebhooksApi,
};
use crate::error::{Error, Result};

/// Production base URL of the Kit v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.kit.com/v4";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Kit-Api-Key";

/// Kit API client.
///
/// Cheap to clone; all clones share one connection pool and one credential.
/// Every call is a single HTTP round trip: no retries, no timeout, no
/// pagination following.
///
/// # Example
///
/// ```no_run
/// use kit_client::{KitClient, PageQuery};
///
/// # async fn example() -> kit_client::Result<()> {
/// let client = KitClient::new("kit_api_key")?;
///
/// let page = client
///     .tags()
///     .list(&PageQuery { per_page: Some(50), ..Default::default() })
///     .await?;
/// println!("{page:#}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct KitClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client with the auth and content headers preinstalled.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests, always ending in `/`.
    pub(crate) base_url: Url,
}

impl std::fmt::Debug for KitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KitClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl KitClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the account API.
    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    /// Access the subscribers API.
    pub fn subscribers(&self) -> SubscribersApi {
        SubscribersApi::new(self.clone())
    }

    /// Access the tags API.
    pub fn tags(&self) -> TagsApi {
        TagsApi::new(self.clone())
    }

    /// Access the sequences API.
    pub fn sequences(&self) -> SequencesApi {
        SequencesApi::new(self.clone())
    }

    /// Access the broadcasts API.
    pub fn broadcasts(&self) -> BroadcastsApi {
        BroadcastsApi::new(self.clone())
    }

    /// Access the forms API.
    pub fn forms(&self) -> FormsApi {
        FormsApi::new(self.clone())
    }

    /// Access the custom fields API.
    pub fn custom_fields(&self) -> CustomFieldsApi {
        CustomFieldsApi::new(self.clone())
    }

    /// Access the webhooks API.
    pub fn webhooks(&self) -> WebhooksApi {
        WebhooksApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request pipeline
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Issue one request and parse the success body as JSON.
    ///
    /// Absent query fields are skipped by the serializer; present ones are
    /// URL-encoded in declaration order.
    pub async fn execute<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Value>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, path, query, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issue one request and return the raw success body.
    async fn send<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<String>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(%method, path, "kit request");

        let mut request = self.inner.http.request(method.clone(), url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "kit API returned error");
            return Err(Error::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }

    /// Make a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.execute::<(), ()>(Method::GET, path, None, None).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<Q>(&self, path: &str, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.execute::<Q, ()>(Method::GET, path, Some(query), None)
            .await
    }

    /// Make a POST request.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<(), B>(Method::POST, path, None, Some(body))
            .await
    }

    /// Make a PUT request.
    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<(), B>(Method::PUT, path, None, Some(body))
            .await
    }

    /// Make a DELETE request. The response body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send::<(), ()>(Method::DELETE, path, None, None)
            .await
            .map(drop)
    }
}

/// Builder for creating a KitClient.
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent in the `X-Kit-Api-Key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<KitClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;

        // Parse and normalize base URL so relative joins keep the version prefix
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(&api_key)
            .map_err(|_| Error::Config("Invalid API key".to_string()))?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-kit-api-key"), key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("kit-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(KitClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
