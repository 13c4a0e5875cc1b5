pub mod client;
pub mod query;
pub mod service;
pub mod types;

pub use client::HttpNotificationApi;
pub use query::QueryParams;
pub use service::{ApiError, NotificationApi};
pub use types::{GiftCard, MessageResponse, PublishRequest, PublishResponse, TopicReference};
