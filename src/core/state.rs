//! # Application State
//!
//! Core state for snsdesk. Domain data only, no TUI types. Presentation
//! state (focus, list cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── endpoint: String                      // service base URL
//! ├── regions: HashMap<Region, RegionState> // one outcome slot per action
//! ├── topics: TopicListView                 // last rendered topic list
//! ├── forms: HashMap<FormKind, Form>        // editable inputs
//! ├── defaults: FormDefaults                // values forms reset to
//! ├── pending_topic: Option<String>         // mirror of the controller's slot
//! └── confirming_delete: bool               // delete prompt is open
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! plus direct field edits from the form panel.

use std::collections::HashMap;

use crate::api::TopicReference;
use crate::core::config::ResolvedConfig;
use crate::core::form::{Form, FormDefaults, FormKind};
use crate::core::outcome::{Region, RegionState};

/// What the topic list region currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TopicListView {
    /// A fetch is in flight.
    #[default]
    Loading,
    /// The service has no topics.
    Empty,
    /// Topics in the order the service returned them.
    Loaded(Vec<TopicReference>),
    /// The last fetch failed.
    Unavailable,
}

impl TopicListView {
    pub fn topics(&self) -> &[TopicReference] {
        match self {
            TopicListView::Loaded(topics) => topics,
            _ => &[],
        }
    }

    /// Placeholder text for states without items.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            TopicListView::Loading => Some("Please wait..."),
            TopicListView::Empty => Some("No topics found"),
            TopicListView::Unavailable => Some("Failed to load topics"),
            TopicListView::Loaded(_) => None,
        }
    }
}

pub struct App {
    pub endpoint: String,
    pub regions: HashMap<Region, RegionState>,
    pub topics: TopicListView,
    pub forms: HashMap<FormKind, Form>,
    pub defaults: FormDefaults,
    pub pending_topic: Option<TopicReference>,
    pub confirming_delete: bool,
}

impl App {
    pub fn new(endpoint: String, defaults: FormDefaults) -> Self {
        Self {
            endpoint,
            regions: Region::ALL
                .into_iter()
                .map(|r| (r, RegionState::default()))
                .collect(),
            topics: TopicListView::default(),
            forms: FormKind::ALL
                .into_iter()
                .map(|k| (k, Form::new(k, &defaults)))
                .collect(),
            defaults,
            pending_topic: None,
            confirming_delete: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.clone(), config.form_defaults())
    }

    pub fn region(&self, region: Region) -> &RegionState {
        &self.regions[&region]
    }

    pub fn region_mut(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_default()
    }

    pub fn form(&self, kind: FormKind) -> &Form {
        &self.forms[&kind]
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut Form {
        let defaults = &self.defaults;
        self.forms
            .entry(kind)
            .or_insert_with(|| Form::new(kind, defaults))
    }
}
