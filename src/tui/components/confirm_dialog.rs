//! # Confirm Dialog Component
//!
//! Modal yes/no prompt shown before a topic is deleted. While it is open all
//! key events are routed here; `y`/Enter confirms, `n`/Esc declines.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this topic?";

/// Maps a key event to an answer. `None` means the dialog stays open.
pub fn answer(event: &TuiEvent) -> Option<bool> {
    match event {
        TuiEvent::InputChar('y' | 'Y') | TuiEvent::Submit => Some(true),
        TuiEvent::InputChar('n' | 'N') | TuiEvent::Escape => Some(false),
        _ => None,
    }
}

pub struct ConfirmDialog<'a> {
    pub prompt: &'a str,
    pub subject: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(prompt: &'a str, subject: &'a str) -> Self {
        Self { prompt, subject }
    }
}

impl Component for ConfirmDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm ")
            .title_bottom(Line::from(" y Yes  n No ").centered());

        let text = vec![
            Line::from(self.prompt).style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(self.subject).style(Style::default().fg(Color::Yellow)),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
