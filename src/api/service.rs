use std::fmt;

use async_trait::async_trait;

use super::types::{MessageResponse, PublishRequest, PublishResponse, TopicReference};

/// Errors that can occur while talking to the notification service.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Service misconfigured (bad base URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). No response received.
    Network(String),
    /// The service answered with a non-2xx status. `message` is the raw body text.
    Api { status: u16, message: String },
    /// A 2xx response whose body was not in the documented shape.
    Parse(String),
}

impl ApiError {
    /// The human-readable body of an API failure, if the service sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The remote operations the notification service exposes.
///
/// One call per method, single attempt. Implementations must not retry.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Where this service lives, for logs and the title bar.
    fn endpoint(&self) -> &str;

    async fn create_topic(&self, topic_name: &str) -> Result<MessageResponse, ApiError>;

    /// Topic references in the order the service returned them.
    async fn list_topics(&self) -> Result<Vec<TopicReference>, ApiError>;

    async fn subscribe(&self, topic_arn: &str, email: &str) -> Result<MessageResponse, ApiError>;

    /// Returns the plain-text confirmation the service sends back.
    async fn delete_topic(&self, topic_arn: &str) -> Result<String, ApiError>;

    async fn publish(&self, request: &PublishRequest) -> Result<PublishResponse, ApiError>;
}
