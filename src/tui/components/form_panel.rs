//! # Form Panel Component
//!
//! Shows the active action's fields and edits them.
//!
//! Split the same way as the rest of the components:
//! - `FormPanel` is a stateless render wrapper over a borrowed `Form`
//! - `FormEditor` borrows the form mutably and turns key events into edits,
//!   emitting `FormEvent::Submit` on Enter
//!
//! Field focus is TUI state (`TuiState::focused_field`), not part of the form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::form::{FieldKind, Form};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width reserved for field labels, including the trailing ": ".
const LABEL_WIDTH: u16 = 17;

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit,
}

pub struct FormPanel<'a> {
    pub form: &'a Form,
    pub focus: usize,
}

impl<'a> FormPanel<'a> {
    pub fn new(form: &'a Form, focus: usize) -> Self {
        Self { form, focus }
    }

    /// Rows needed to show every field plus borders.
    pub fn required_height(form: &Form) -> u16 {
        form.fields.len() as u16 + 2
    }
}

impl Component for FormPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.form.kind.label()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(vec![Constraint::Length(1); self.form.fields.len()])
            .split(inner);

        for (i, (field, row)) in self.form.fields.iter().zip(rows.iter()).enumerate() {
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value_style = match field.kind {
                FieldKind::Number => Style::default().fg(Color::Yellow),
                FieldKind::Text => Style::default(),
            };
            let label = format!("{:<width$}", format!("{}:", field.label), width = LABEL_WIDTH as usize);
            let line = Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(field.value.as_str(), value_style),
            ]);
            frame.render_widget(Paragraph::new(line), *row);

            if focused {
                frame.set_cursor_position(Position::new(cursor_column(*row, &field.value), row.y));
            }
        }
    }
}

/// Column just past the value, clamped to the row. Values can be far wider
/// than a `u16` after a long paste.
fn cursor_column(row: Rect, value: &str) -> u16 {
    let value_width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    row.x
        .saturating_add(LABEL_WIDTH)
        .saturating_add(value_width)
        .min(row.right().saturating_sub(1))
}

/// Mutable view of a form used to apply key events.
pub struct FormEditor<'a> {
    form: &'a mut Form,
    focus: &'a mut usize,
}

impl<'a> FormEditor<'a> {
    pub fn new(form: &'a mut Form, focus: &'a mut usize) -> Self {
        // Focus may point past the end after switching to a shorter form
        *focus = (*focus).min(form.fields.len().saturating_sub(1));
        Self { form, focus }
    }
}

impl EventHandler for FormEditor<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        let len = self.form.fields.len();
        match event {
            TuiEvent::Submit => return Some(FormEvent::Submit),
            TuiEvent::NextField => *self.focus = (*self.focus + 1) % len,
            TuiEvent::PrevField => *self.focus = (*self.focus + len - 1) % len,
            TuiEvent::InputChar(c) => {
                if let Some(field) = self.form.fields.get_mut(*self.focus) {
                    field.value.push(*c);
                }
            }
            TuiEvent::Paste(text) => {
                if let Some(field) = self.form.fields.get_mut(*self.focus) {
                    // Fields are single-line
                    field.value.push_str(text.lines().next().unwrap_or(""));
                }
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.form.fields.get_mut(*self.focus) {
                    field.value.pop();
                }
            }
            _ => {}
        }
        None
    }
}
