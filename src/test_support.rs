//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{
    ApiError, MessageResponse, NotificationApi, PublishRequest, PublishResponse, TopicReference,
};
use crate::core::action::Action;
use crate::core::form::FormDefaults;
use crate::core::state::App;

/// A remote call recorded by `MockApi`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateTopic(String),
    ListTopics,
    Subscribe { topic_arn: String, email: String },
    DeleteTopic(String),
    Publish(PublishRequest),
}

/// In-memory `NotificationApi` that records every call and answers with
/// canned results.
pub struct MockApi {
    pub calls: Mutex<Vec<Call>>,
    pub create_topic: Result<MessageResponse, ApiError>,
    pub list_topics: Result<Vec<TopicReference>, ApiError>,
    pub subscribe: Result<MessageResponse, ApiError>,
    pub delete_topic: Result<String, ApiError>,
    pub publish: Result<PublishResponse, ApiError>,
}

fn message(text: &str) -> MessageResponse {
    MessageResponse {
        message: text.to_string(),
        topic_arn: None,
        subscription_arn: None,
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            create_topic: Ok(message("Topic created successfully")),
            list_topics: Ok(Vec::new()),
            subscribe: Ok(message("Subscription request sent - Check email to confirm")),
            delete_topic: Ok("Topic deleted successfully".to_string()),
            publish: Ok(PublishResponse {
                message: "Sent".to_string(),
                message_id: "m-1".to_string(),
            }),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl NotificationApi for MockApi {
    fn endpoint(&self) -> &str {
        "mock"
    }

    async fn create_topic(&self, topic_name: &str) -> Result<MessageResponse, ApiError> {
        self.record(Call::CreateTopic(topic_name.to_string()));
        self.create_topic.clone()
    }

    async fn list_topics(&self) -> Result<Vec<TopicReference>, ApiError> {
        self.record(Call::ListTopics);
        self.list_topics.clone()
    }

    async fn subscribe(&self, topic_arn: &str, email: &str) -> Result<MessageResponse, ApiError> {
        self.record(Call::Subscribe {
            topic_arn: topic_arn.to_string(),
            email: email.to_string(),
        });
        self.subscribe.clone()
    }

    async fn delete_topic(&self, topic_arn: &str) -> Result<String, ApiError> {
        self.record(Call::DeleteTopic(topic_arn.to_string()));
        self.delete_topic.clone()
    }

    async fn publish(&self, request: &PublishRequest) -> Result<PublishResponse, ApiError> {
        self.record(Call::Publish(request.clone()));
        self.publish.clone()
    }
}

/// Everything currently queued on the action channel.
pub fn drain(rx: &Receiver<Action>) -> Vec<Action> {
    rx.try_iter().collect()
}

/// Collects actions until one matches `pred` (inclusive). Yields to the
/// runtime between polls so spawned tasks can make progress.
pub async fn wait_for(rx: &Receiver<Action>, pred: impl Fn(&Action) -> bool) -> Vec<Action> {
    let mut seen = Vec::new();
    for _ in 0..200 {
        while let Ok(action) = rx.try_recv() {
            let done = pred(&action);
            seen.push(action);
            if done {
                return seen;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for action; saw {:?}", seen);
}

/// Creates a test App with default form values.
pub fn test_app() -> App {
    App::new("http://test.invalid".to_string(), FormDefaults::default())
}
