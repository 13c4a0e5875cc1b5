//! reqwest implementation of [`NotificationApi`].
//!
//! Each method is one HTTP exchange. Non-2xx bodies are read as text and
//! handed back verbatim inside `ApiError::Api`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use super::query::{QueryParams, endpoint_url};
use super::service::{ApiError, NotificationApi};
use super::types::{MessageResponse, PublishRequest, PublishResponse, TopicReference};

pub const CREATE_TOPIC_PATH: &str = "/api/sns/create-topic";
pub const LIST_TOPICS_PATH: &str = "/api/sns/list-topics";
pub const SUBSCRIBE_PATH: &str = "/api/sns/subscribe";
pub const DELETE_TOPIC_PATH: &str = "/api/sns/delete-topic";
pub const PUBLISH_PATH: &str = "/api/sns/publish";

/// Notification service reached over HTTP.
pub struct HttpNotificationApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNotificationApi {
    /// `timeout` is the transport timeout; the controller enforces none of its own.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { base_url, client })
    }

    /// Sends one request and returns the response if it was a 2xx.
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&PublishRequest>,
    ) -> Result<Response, ApiError> {
        let url = endpoint_url(&self.base_url, path, params)?;
        info!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Response status for {}: {}", path, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            // Body is optional on errors; an unreadable one counts as empty
            let message = response.text().await.unwrap_or_default();
            warn!("Notification API error on {}: {} - {}", path, status, message);
            return Err(ApiError::Api { status, message });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&PublishRequest>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, params, body).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("Unexpected body from {}: {} ({})", path, text, e);
            ApiError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl NotificationApi for HttpNotificationApi {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn create_topic(&self, topic_name: &str) -> Result<MessageResponse, ApiError> {
        let params = QueryParams::new().with("topicName", topic_name);
        let response: MessageResponse = self
            .send_json(Method::POST, CREATE_TOPIC_PATH, &params, None)
            .await?;
        debug!("Created topic arn={:?}", response.topic_arn);
        Ok(response)
    }

    async fn list_topics(&self) -> Result<Vec<TopicReference>, ApiError> {
        let topics: Vec<TopicReference> = self
            .send_json(Method::GET, LIST_TOPICS_PATH, &QueryParams::new(), None)
            .await?;
        debug!("Listed {} topic(s)", topics.len());
        Ok(topics)
    }

    async fn subscribe(&self, topic_arn: &str, email: &str) -> Result<MessageResponse, ApiError> {
        let params = QueryParams::new()
            .with("topicArn", topic_arn)
            .with("email", email);
        let response: MessageResponse = self
            .send_json(Method::POST, SUBSCRIBE_PATH, &params, None)
            .await?;
        debug!("Subscription arn={:?}", response.subscription_arn);
        Ok(response)
    }

    async fn delete_topic(&self, topic_arn: &str) -> Result<String, ApiError> {
        let params = QueryParams::new().with("topicArn", topic_arn);
        let response = self
            .send(Method::DELETE, DELETE_TOPIC_PATH, &params, None)
            .await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(text.trim().to_string())
    }

    async fn publish(&self, request: &PublishRequest) -> Result<PublishResponse, ApiError> {
        self.send_json(Method::POST, PUBLISH_PATH, &QueryParams::new(), Some(request))
            .await
    }
}
