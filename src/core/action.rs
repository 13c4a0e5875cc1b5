//! # Actions
//!
//! Everything that can happen in snsdesk becomes an `Action`.
//! User presses Enter on a form? That's `Action::Submit(kind)`.
//! The service answers? That's `Action::OutcomeReady { .. }`.
//!
//! `update()` folds an action into `App` and returns an `Effect` telling the
//! event loop what I/O to start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::api::TopicReference;
use crate::core::controller::{Collection, Submission};
use crate::core::form::{FormKind, TOPIC_ARN};
use crate::core::outcome::{OutcomeView, Region};
use crate::core::state::{App, TopicListView};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // From the UI
    /// Harvest the form and send it.
    Submit(FormKind),
    /// Answer to the delete confirmation prompt.
    ConfirmDelete(bool),
    Refresh,
    Quit,

    // From the controller
    Pending(Region),
    OutcomeReady { region: Region, outcome: OutcomeView },
    ResetForm(FormKind),
    TopicsLoading,
    TopicsLoaded(Vec<TopicReference>),
    TopicsUnavailable,
    ReferenceSelected(Option<TopicReference>),
}

/// I/O the event loop must start after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Submit(Submission),
    Refresh(Collection),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(FormKind::DeleteTopic) => {
            app.confirming_delete = true;
            Effect::None
        }
        Action::Submit(kind) => Effect::Submit(Submission::new(kind, app.form(kind).values())),
        Action::ConfirmDelete(confirmed) => {
            if !std::mem::take(&mut app.confirming_delete) || !confirmed {
                return Effect::None;
            }
            let kind = FormKind::DeleteTopic;
            Effect::Submit(Submission::new(kind, app.form(kind).values()).confirmed())
        }
        Action::Refresh => Effect::Refresh(Collection::Topics),
        Action::Quit => Effect::Quit,
        Action::Pending(region) => {
            app.region_mut(region).begin();
            Effect::None
        }
        Action::OutcomeReady { region, outcome } => {
            app.region_mut(region).show(outcome);
            Effect::None
        }
        Action::ResetForm(kind) => {
            let defaults = app.defaults.clone();
            app.form_mut(kind).reset(&defaults);
            Effect::None
        }
        Action::TopicsLoading => {
            app.topics = TopicListView::Loading;
            let region = app.region_mut(Region::TopicList);
            region.begin();
            region.outcome = Some(OutcomeView::success("Loading topics..."));
            Effect::None
        }
        Action::TopicsLoaded(topics) => {
            app.topics = if topics.is_empty() {
                TopicListView::Empty
            } else {
                TopicListView::Loaded(topics)
            };
            Effect::None
        }
        Action::TopicsUnavailable => {
            app.topics = TopicListView::Unavailable;
            Effect::None
        }
        Action::ReferenceSelected(topic) => {
            if let Some(ref topic) = topic {
                for kind in FormKind::ALL {
                    app.form_mut(kind).set(TOPIC_ARN, topic.clone());
                }
            }
            app.pending_topic = topic;
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{EMAIL, SUBJECT, TOPIC_NAME};
    use crate::core::outcome::Phase;
    use crate::test_support::test_app;

    #[test]
    fn test_submit_harvests_form_values() {
        let mut app = test_app();
        app.form_mut(FormKind::CreateTopic).set(TOPIC_NAME, "orders");

        let effect = update(&mut app, Action::Submit(FormKind::CreateTopic));
        let Effect::Submit(submission) = effect else {
            panic!("expected submit effect");
        };
        assert_eq!(submission.kind, FormKind::CreateTopic);
        assert_eq!(submission.values.text(TOPIC_NAME), "orders");
        assert!(!submission.confirmed);
    }

    #[test]
    fn test_delete_asks_for_confirmation_first() {
        let mut app = test_app();
        app.form_mut(FormKind::DeleteTopic).set(TOPIC_ARN, "t1");

        assert_eq!(update(&mut app, Action::Submit(FormKind::DeleteTopic)), Effect::None);
        assert!(app.confirming_delete);

        let effect = update(&mut app, Action::ConfirmDelete(true));
        let Effect::Submit(submission) = effect else {
            panic!("expected submit effect");
        };
        assert!(submission.confirmed);
        assert_eq!(submission.values.text(TOPIC_ARN), "t1");
        assert!(!app.confirming_delete);
    }

    #[test]
    fn test_declined_delete_issues_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Submit(FormKind::DeleteTopic));
        let before = app.region(Region::DeleteTopic).clone();

        assert_eq!(update(&mut app, Action::ConfirmDelete(false)), Effect::None);
        assert!(!app.confirming_delete);
        assert_eq!(app.region(Region::DeleteTopic), &before);
    }

    #[test]
    fn test_stray_confirmation_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ConfirmDelete(true)), Effect::None);
    }

    #[test]
    fn test_outcome_replaces_never_appends() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OutcomeReady {
                region: Region::Subscribe,
                outcome: OutcomeView::error("Failed to subscribe"),
            },
        );
        update(&mut app, Action::Pending(Region::Subscribe));
        assert_eq!(app.region(Region::Subscribe).phase, Phase::Pending);

        update(
            &mut app,
            Action::OutcomeReady {
                region: Region::Subscribe,
                outcome: OutcomeView::success("Subscription request sent"),
            },
        );
        let region = app.region(Region::Subscribe);
        assert_eq!(region.phase, Phase::Success);
        assert_eq!(
            region.outcome,
            Some(OutcomeView::success("Subscription request sent"))
        );
        // Other regions untouched
        assert_eq!(app.region(Region::Publish).outcome, None);
    }

    #[test]
    fn test_error_outcome_keeps_form() {
        let mut app = test_app();
        app.form_mut(FormKind::Subscribe).set(EMAIL, "a@b.com");
        update(
            &mut app,
            Action::OutcomeReady {
                region: Region::Subscribe,
                outcome: OutcomeView::error("Failed to subscribe"),
            },
        );
        assert_eq!(
            app.form(FormKind::Subscribe).field(EMAIL).unwrap().value,
            "a@b.com"
        );
    }

    #[test]
    fn test_reset_form_restores_defaults() {
        let mut app = test_app();
        app.form_mut(FormKind::Publish).set(SUBJECT, "Other");
        update(&mut app, Action::ResetForm(FormKind::Publish));
        assert_eq!(
            app.form(FormKind::Publish).field(SUBJECT).unwrap().value,
            app.defaults.subject
        );
    }

    #[test]
    fn test_topics_loading_then_empty() {
        let mut app = test_app();
        update(&mut app, Action::TopicsLoading);
        assert_eq!(app.topics, TopicListView::Loading);
        assert_eq!(
            app.region(Region::TopicList).outcome,
            Some(OutcomeView::success("Loading topics..."))
        );

        update(&mut app, Action::TopicsLoaded(vec![]));
        assert_eq!(app.topics, TopicListView::Empty);
    }

    #[test]
    fn test_topics_keep_server_order() {
        let mut app = test_app();
        let topics = vec!["zeta".to_string(), "alpha".to_string()];
        update(&mut app, Action::TopicsLoaded(topics.clone()));
        assert_eq!(app.topics, TopicListView::Loaded(topics));
    }

    #[test]
    fn test_reference_selected_fills_topic_fields() {
        let mut app = test_app();
        update(&mut app, Action::ReferenceSelected(Some("topic-A".to_string())));
        assert_eq!(app.pending_topic.as_deref(), Some("topic-A"));
        for kind in [FormKind::Subscribe, FormKind::DeleteTopic, FormKind::Publish] {
            assert_eq!(app.form(kind).field(TOPIC_ARN).unwrap().value, "topic-A");
        }

        update(&mut app, Action::ReferenceSelected(None));
        assert_eq!(app.pending_topic, None);
    }

    #[test]
    fn test_refresh_and_quit_effects() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Refresh), Effect::Refresh(Collection::Topics));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
