//! # Request Controller
//!
//! Owns the lifecycle of one user-initiated action:
//!
//! ```text
//! harvest form ─▶ remote call ─▶ OutcomeView ─▶ (reset form) ─▶ (refresh list)
//! ```
//!
//! The controller never touches display state directly. It emits `Action`s
//! into the sink it was built with, and the event loop folds them into `App`
//! through `update()`. Each call suspends only its own task, so any number of
//! submissions may be in flight at once. For a given region the response that
//! arrives last wins.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::api::{ApiError, GiftCard, NotificationApi, PublishRequest, TopicReference};
use crate::core::action::Action;
use crate::core::form::{
    AMOUNT, DATE, EMAIL, FormKind, FormValues, GIFT_CARD_TYPE, SUBJECT, TOPIC_ARN, TOPIC_NAME,
    USER_NAME,
};
use crate::core::outcome::{OutcomeView, Region};

const CREATE_TOPIC_SUFFIX: &str = "Please wait a few seconds for the topic to appear in the list.";
const DELETE_TOPIC_SUFFIX: &str =
    "Please wait up to 60 seconds for the topic to disappear from the list.";
pub const NO_TOPIC_SELECTED: &str = "Please select a topic ARN first";

/// Collections that can be re-fetched and re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Topics,
}

impl Collection {
    pub fn region(self) -> Region {
        match self {
            Collection::Topics => Region::TopicList,
        }
    }
}

/// One invocation of a form-backed action.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub kind: FormKind,
    pub values: FormValues,
    /// Destructive actions only run once the user has confirmed them.
    pub confirmed: bool,
}

impl Submission {
    pub fn new(kind: FormKind, values: FormValues) -> Self {
        Self {
            kind,
            values,
            confirmed: false,
        }
    }

    pub fn confirmed(mut self) -> Self {
        self.confirmed = true;
        self
    }

    fn needs_confirmation(&self) -> bool {
        self.kind == FormKind::DeleteTopic && !self.confirmed
    }
}

#[derive(Clone)]
pub struct RequestController {
    api: Arc<dyn NotificationApi>,
    sink: Sender<Action>,
    pending: Arc<Mutex<Option<TopicReference>>>,
}

impl RequestController {
    pub fn new(api: Arc<dyn NotificationApi>, sink: Sender<Action>) -> Self {
        Self {
            api,
            sink,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Entry point for the hosting shell, called once at startup.
    pub async fn initialize(&self) {
        info!("Initializing against {}", self.api.endpoint());
        self.refresh(Collection::Topics).await;
    }

    /// Stores `topic` as the input for the next submission that leaves its
    /// topic field blank. No remote call.
    pub fn select_reference(&self, topic: TopicReference) {
        debug!("Selected topic {}", topic);
        *self.slot() = Some(topic.clone());
        self.emit(Action::ReferenceSelected(Some(topic)));
    }

    pub fn pending_reference(&self) -> Option<TopicReference> {
        self.slot().clone()
    }

    /// Runs one action to completion and returns the outcome it rendered.
    ///
    /// Returns `None` when nothing was done: an unconfirmed delete issues no
    /// call and leaves its region untouched.
    pub async fn submit(&self, submission: Submission) -> Option<OutcomeView> {
        if submission.needs_confirmation() {
            info!("Delete topic not confirmed, skipping");
            return None;
        }

        let Submission { kind, values, .. } = submission;
        let region = kind.region();
        let request_id = Uuid::new_v4();

        let topic = if kind.targets_topic() {
            self.resolve_topic(&values)
        } else {
            TopicReference::new()
        };
        if kind == FormKind::Publish && topic.is_empty() {
            let outcome = OutcomeView::error(NO_TOPIC_SELECTED);
            self.emit(Action::OutcomeReady {
                region,
                outcome: outcome.clone(),
            });
            return Some(outcome);
        }

        info!("[{}] {} started", request_id, kind.label());
        self.emit(Action::Pending(region));

        let result = match kind {
            FormKind::CreateTopic => self
                .api
                .create_topic(&values.text(TOPIC_NAME))
                .await
                .map(|resp| format!("{} - {}", resp.message, CREATE_TOPIC_SUFFIX)),
            FormKind::Subscribe => self
                .api
                .subscribe(&topic, &values.text(EMAIL))
                .await
                .map(|resp| resp.message),
            FormKind::DeleteTopic => self
                .api
                .delete_topic(&topic)
                .await
                .map(|text| format!("{} - {}", text, DELETE_TOPIC_SUFFIX)),
            FormKind::Publish => self
                .api
                .publish(&publish_request(topic.clone(), &values))
                .await
                .map(|resp| format!("{} (ID: {})", resp.message, resp.message_id)),
        };

        let outcome = match result {
            Ok(message) => {
                info!("[{}] {} succeeded", request_id, kind.label());
                OutcomeView::success(message)
            }
            Err(e) => {
                warn!("[{}] {} failed: {}", request_id, kind.label(), e);
                failure_outcome(region, &e)
            }
        };

        self.emit(Action::OutcomeReady {
            region,
            outcome: outcome.clone(),
        });

        if outcome.is_success() {
            self.emit(Action::ResetForm(kind));
            if kind.targets_topic() {
                self.release_slot(&topic);
            }
            if kind.invalidates_topics() {
                let this = self.clone();
                tokio::spawn(async move {
                    this.refresh(Collection::Topics).await;
                });
            }
        }

        Some(outcome)
    }

    /// Re-fetches `collection` and re-renders it in server order.
    pub async fn refresh(&self, collection: Collection) {
        let region = collection.region();
        match collection {
            Collection::Topics => {
                self.emit(Action::TopicsLoading);
                match self.api.list_topics().await {
                    Ok(topics) => {
                        let outcome = if topics.is_empty() {
                            OutcomeView::success("No topics available")
                        } else {
                            OutcomeView::success(format!("Found {} topic(s)", topics.len()))
                        };
                        self.emit(Action::TopicsLoaded(topics));
                        self.emit(Action::OutcomeReady { region, outcome });
                    }
                    Err(e) => {
                        warn!("Topic refresh failed: {}", e);
                        self.emit(Action::TopicsUnavailable);
                        self.emit(Action::OutcomeReady {
                            region,
                            outcome: failure_outcome(region, &e),
                        });
                    }
                }
            }
        }
    }

    /// The topic a submission targets: its own field first, then the slot.
    fn resolve_topic(&self, values: &FormValues) -> TopicReference {
        let typed = values.text(TOPIC_ARN).trim().to_string();
        if !typed.is_empty() {
            return typed;
        }
        self.pending_reference().unwrap_or_default()
    }

    /// Clears the slot once its topic was used, unless a newer selection replaced it.
    fn release_slot(&self, consumed: &str) {
        let mut slot = self.slot();
        if slot.as_deref() == Some(consumed) {
            *slot = None;
            drop(slot);
            self.emit(Action::ReferenceSelected(None));
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<TopicReference>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, action: Action) {
        if self.sink.send(action).is_err() {
            warn!("Failed to send action: receiver dropped");
        }
    }
}

fn publish_request(topic_arn: TopicReference, values: &FormValues) -> PublishRequest {
    PublishRequest {
        topic_arn,
        subject: values.text(SUBJECT),
        gift_card: GiftCard {
            user_name: values.text(USER_NAME),
            gift_card_type: values.text(GIFT_CARD_TYPE),
            amount: values.number(AMOUNT),
            date: values.text(DATE),
        },
    }
}

/// The response body when the service sent one, otherwise the region's fallback.
fn failure_outcome(region: Region, error: &ApiError) -> OutcomeView {
    OutcomeView::error(error.body().unwrap_or(region.fallback_error()))
}
