use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow persistent
/// state, and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can update presentation state
/// (list offsets, cursor placement) during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
