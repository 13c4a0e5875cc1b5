use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit, // Ctrl+C
    Submit,
    Refresh, // Ctrl+R

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    Escape,
    NextField,      // Tab
    PrevField,      // Shift+Tab
    NextForm,       // Ctrl+Right
    PrevForm,       // Ctrl+Left
    SelectForm(usize), // F1..F4
    CursorUp,
    CursorDown,
    UseTopic, // Ctrl+T copies the highlighted topic into the forms
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            // Only act on presses; keyboard enhancement also reports releases
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::UseTopic),
                (KeyModifiers::CONTROL, KeyCode::Right) => Some(TuiEvent::NextForm),
                (KeyModifiers::CONTROL, KeyCode::Left) => Some(TuiEvent::PrevForm),
                (_, KeyCode::F(n @ 1..=4)) => Some(TuiEvent::SelectForm(n as usize - 1)),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::NextField),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
