//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: service endpoint and pending topic
//! - `OutcomeBanner`: one region's current outcome
//! - `FormPanel`: the active form's fields
//! - `ConfirmDialog`: the delete confirmation overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `FormEditor`: applies key events to a borrowed `Form`
//! - `TopicListState`: list highlight, emits `TopicEvent::Select`
//!
//! Components receive external data as props, never by reaching into `App`
//! themselves.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── topic_list.rs      (Topic ARNs, selection)
//! ├── form_panel.rs      (Field rendering and editing)
//! ├── outcome_banner.rs  (Per-region result)
//! └── confirm_dialog.rs  (Delete prompt)
//! ```

pub mod confirm_dialog;
pub mod form_panel;
pub mod outcome_banner;
pub mod title_bar;
pub mod topic_list;

pub use confirm_dialog::ConfirmDialog;
pub use form_panel::{FormEditor, FormEvent, FormPanel};
pub use outcome_banner::OutcomeBanner;
pub use title_bar::TitleBar;
pub use topic_list::{TopicEvent, TopicList, TopicListState};
