//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! key event ──▶ route_event() ──▶ Intent ──▶ update() ──▶ Effect ──▶ tokio::spawn(controller)
//!                                                ▲                          │
//!                                                └──── Action channel ◀─────┘
//! ```
//!
//! Remote calls never run on the loop itself. Each one is a spawned task that
//! reports back through the action channel, so the UI keeps redrawing while
//! any number of calls are outstanding.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::api::{HttpNotificationApi, TopicReference};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::RequestController;
use crate::core::form::FormKind;
use crate::core::outcome::Phase;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::confirm_dialog;
use crate::tui::components::{FormEditor, FormEvent, TopicEvent, TopicListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub active_form: FormKind,
    pub focused_field: usize,
    pub topic_list: TopicListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            active_form: FormKind::CreateTopic,
            focused_field: 0,
            topic_list: TopicListState::new(),
        }
    }

    fn switch_form(&mut self, kind: FormKind) {
        if self.active_form != kind {
            self.active_form = kind;
            self.focused_field = 0;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a key event asks the loop to do beyond local UI changes.
#[derive(Debug, Clone, PartialEq)]
enum Intent {
    Dispatch(Action),
    Select(TopicReference),
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Harmlessly ignored by terminals without keyboard enhancement support
        execute!(
            stdout(),
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let api = HttpNotificationApi::new(config.base_url.clone(), config.timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let controller = RequestController::new(Arc::new(api), tx);

    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let init = controller.clone();
    tokio::spawn(async move { init.initialize().await });

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let busy = app.regions.values().any(|r| r.phase == Phase::Pending);
        if busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while a spinner is visible, long when idle
        let timeout = if busy {
            std::time::Duration::from_millis(120)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match route_event(&event, &mut app, &mut tui) {
                Some(Intent::Dispatch(action)) => {
                    should_quit |= apply(update(&mut app, action), &controller);
                }
                Some(Intent::Select(topic)) => controller.select_reference(topic),
                None => {}
            }
        }

        // Handle background task actions (controller results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= apply(update(&mut app, action), &controller);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Starts the I/O an effect asks for. Returns true when the loop should exit.
fn apply(effect: Effect, controller: &RequestController) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Submit(submission) => {
            info!("Spawning {} request", submission.kind.label());
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.submit(submission).await;
            });
            false
        }
        Effect::Refresh(collection) => {
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.refresh(collection).await;
            });
            false
        }
    }
}

/// Routes one key event: local UI changes happen here, everything that needs
/// the reducer or the controller comes back as an `Intent`.
fn route_event(event: &TuiEvent, app: &mut App, tui: &mut TuiState) -> Option<Intent> {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Intent::Dispatch(Action::Quit));
    }

    // The confirmation prompt is modal
    if app.confirming_delete {
        return confirm_dialog::answer(event).map(|yes| Intent::Dispatch(Action::ConfirmDelete(yes)));
    }

    match event {
        TuiEvent::Escape => Some(Intent::Dispatch(Action::Quit)),
        TuiEvent::Refresh => Some(Intent::Dispatch(Action::Refresh)),
        TuiEvent::NextForm => {
            tui.switch_form(tui.active_form.next());
            None
        }
        TuiEvent::PrevForm => {
            tui.switch_form(tui.active_form.prev());
            None
        }
        TuiEvent::SelectForm(index) => {
            if let Some(kind) = FormKind::ALL.get(*index) {
                tui.switch_form(*kind);
            }
            None
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::UseTopic => {
            match tui.topic_list.handle_event(event, app.topics.topics()) {
                Some(TopicEvent::Select(topic)) => Some(Intent::Select(topic)),
                None => None,
            }
        }
        _ => {
            let kind = tui.active_form;
            let mut editor = FormEditor::new(app.form_mut(kind), &mut tui.focused_field);
            match editor.handle_event(event) {
                Some(FormEvent::Submit) => Some(Intent::Dispatch(Action::Submit(kind))),
                None => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{TOPIC_ARN, TOPIC_NAME};
    use crate::test_support::test_app;

    #[test]
    fn test_typing_then_enter_submits_active_form() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        for c in "orders".chars() {
            assert_eq!(route_event(&TuiEvent::InputChar(c), &mut app, &mut tui), None);
        }
        assert_eq!(
            app.form(FormKind::CreateTopic).field(TOPIC_NAME).unwrap().value,
            "orders"
        );
        assert_eq!(
            route_event(&TuiEvent::Submit, &mut app, &mut tui),
            Some(Intent::Dispatch(Action::Submit(FormKind::CreateTopic)))
        );
    }

    #[test]
    fn test_function_keys_switch_forms() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.focused_field = 1;
        route_event(&TuiEvent::SelectForm(3), &mut app, &mut tui);
        assert_eq!(tui.active_form, FormKind::Publish);
        assert_eq!(tui.focused_field, 0);

        route_event(&TuiEvent::NextForm, &mut app, &mut tui);
        assert_eq!(tui.active_form, FormKind::CreateTopic);
        route_event(&TuiEvent::SelectForm(9), &mut app, &mut tui);
        assert_eq!(tui.active_form, FormKind::CreateTopic);
    }

    #[test]
    fn test_confirmation_is_modal() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.confirming_delete = true;

        assert_eq!(route_event(&TuiEvent::InputChar('x'), &mut app, &mut tui), None);
        assert_eq!(route_event(&TuiEvent::Refresh, &mut app, &mut tui), None);
        assert_eq!(
            route_event(&TuiEvent::InputChar('y'), &mut app, &mut tui),
            Some(Intent::Dispatch(Action::ConfirmDelete(true)))
        );
        assert_eq!(
            route_event(&TuiEvent::Escape, &mut app, &mut tui),
            Some(Intent::Dispatch(Action::ConfirmDelete(false)))
        );
        // Typing did not leak into the form
        assert_eq!(
            app.form(FormKind::CreateTopic).field(TOPIC_NAME).unwrap().value,
            ""
        );
    }

    #[test]
    fn test_use_topic_selects_highlighted() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(
            &mut app,
            Action::TopicsLoaded(vec!["topic-A".to_string(), "topic-B".to_string()]),
        );

        route_event(&TuiEvent::CursorDown, &mut app, &mut tui);
        assert_eq!(
            route_event(&TuiEvent::UseTopic, &mut app, &mut tui),
            Some(Intent::Select("topic-A".to_string()))
        );
    }

    #[test]
    fn test_quit_and_refresh() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&TuiEvent::Escape, &mut app, &mut tui),
            Some(Intent::Dispatch(Action::Quit))
        );
        assert_eq!(
            route_event(&TuiEvent::ForceQuit, &mut app, &mut tui),
            Some(Intent::Dispatch(Action::Quit))
        );
        assert_eq!(
            route_event(&TuiEvent::Refresh, &mut app, &mut tui),
            Some(Intent::Dispatch(Action::Refresh))
        );
    }

    #[tokio::test]
    async fn test_delete_flow_reaches_controller_only_after_confirm() {
        use crate::test_support::{Call, MockApi};

        let api = Arc::new(MockApi::default());
        let (tx, _rx) = mpsc::channel();
        let controller = RequestController::new(api.clone(), tx);
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.switch_form(FormKind::DeleteTopic);
        app.form_mut(FormKind::DeleteTopic).set(TOPIC_ARN, "t1");

        let Some(Intent::Dispatch(action)) = route_event(&TuiEvent::Submit, &mut app, &mut tui)
        else {
            panic!("expected dispatch");
        };
        assert_eq!(update(&mut app, action), Effect::None);
        assert!(api.calls().is_empty());

        let Some(Intent::Dispatch(action)) =
            route_event(&TuiEvent::InputChar('y'), &mut app, &mut tui)
        else {
            panic!("expected dispatch");
        };
        let Effect::Submit(submission) = update(&mut app, action) else {
            panic!("expected submit effect");
        };
        controller.submit(submission).await;
        assert_eq!(api.calls()[0], Call::DeleteTopic("t1".to_string()));
    }
}
