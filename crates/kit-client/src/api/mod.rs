//! API endpoint implementations, one accessor per Kit resource.

mod account;
mod broadcasts;
mod custom_fields;
mod forms;
mod sequences;
mod subscribers;
mod tags;
mod webhooks;

pub use account::AccountApi;
pub use broadcasts::BroadcastsApi;
pub use custom_fields::CustomFieldsApi;
pub use forms::FormsApi;
pub use sequences::SequencesApi;
pub use subscribers::SubscribersApi;
pub use tags::TagsApi;
pub use webhooks::WebhooksApi;
