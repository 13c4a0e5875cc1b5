//! # Core Application Logic
//!
//! This module contains snsdesk's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (regions, forms) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • RequestController    │
//!                    └───────────┬─────────────┘
//!                                │ Action channel
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all display state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`controller`]: `RequestController`, the only place remote calls start
//! - [`outcome`]: Regions and the outcome views they show
//! - [`form`]: Form fields, defaults and harvested values
//! - [`config`]: Config file / env / CLI resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod form;
pub mod outcome;
pub mod state;
