//! # Outcome Regions
//!
//! Every action writes into its own display region. A region holds at most
//! one `OutcomeView`; writing a new one replaces the old.
//!
//! ```text
//! Idle ──submit──▶ Pending ──┬──▶ Success
//!   ▲                        └──▶ Error
//!   └──────── next submit ────────┘
//! ```

/// A dedicated area of the UI showing the outcome of one action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    CreateTopic,
    TopicList,
    Subscribe,
    DeleteTopic,
    Publish,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::CreateTopic,
        Region::TopicList,
        Region::Subscribe,
        Region::DeleteTopic,
        Region::Publish,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::CreateTopic => "Create Topic",
            Region::TopicList => "Topics",
            Region::Subscribe => "Subscribe",
            Region::DeleteTopic => "Delete Topic",
            Region::Publish => "Send Notification",
        }
    }

    /// Message shown when an action fails without a usable response body.
    pub fn fallback_error(self) -> &'static str {
        match self {
            Region::CreateTopic => "Failed to create topic",
            Region::TopicList => "Failed to list topics",
            Region::Subscribe => "Failed to subscribe",
            Region::DeleteTopic => "Failed to delete topic",
            Region::Publish => "Failed to send notification",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

/// The transient success/error message shown after an action.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeView {
    pub status: Status,
    pub message: String,
}

impl OutcomeView {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Display slot for one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionState {
    pub phase: Phase,
    pub outcome: Option<OutcomeView>,
}

impl RegionState {
    /// Marks a call as outstanding. The previous outcome stays visible until replaced.
    pub fn begin(&mut self) {
        self.phase = Phase::Pending;
    }

    /// Replaces whatever the region showed with `outcome`.
    pub fn show(&mut self, outcome: OutcomeView) {
        self.phase = match outcome.status {
            Status::Success => Phase::Success,
            Status::Error => Phase::Error,
        };
        self.outcome = Some(outcome);
    }
}
