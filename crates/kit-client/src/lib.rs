//! HTTP client for the Kit (ConvertKit) v4 REST API.
//!
//! This crate is a thin authenticated gateway: it builds requests, attaches
//! the API key, serializes query strings and bodies, and turns any non-2xx
//! response into [`Error::Api`]. Payloads are passed through as
//! [`serde_json::Value`] without reinterpretation.
//!
//! # Example
//!
//! ```no_run
//! use kit_client::{CreateSubscriberRequest, KitClient, PageQuery, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = KitClient::new("kit_api_key")?;
//!
//! // Fetch one page of tags
//! let tags = client.tags().list(&PageQuery::default()).await?;
//! println!("{tags:#}");
//!
//! // Create a subscriber
//! let created = client
//!     .subscribers()
//!     .create(&CreateSubscriberRequest {
//!         email_address: "a@b.com".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{created:#}");
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Account**: get
//! - **Subscribers**: list, get, create, update, tags, add/remove tag
//! - **Tags**: list, get, create, update, delete, list subscribers
//! - **Sequences**: list, get, add subscriber
//! - **Broadcasts**: list, get, create, update, delete
//! - **Forms**: list, get, add subscriber
//! - **Custom fields**: list
//! - **Webhooks**: list, create, delete
//!
//! Pagination is cursor pass-through: each call fetches exactly one page.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, KitClient, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use types::*;
