//! # OutcomeBanner Component
//!
//! Renders one region's `RegionState`: the single visible outcome, colored by
//! status, with a pending marker while a call is outstanding.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::outcome::{Phase, Region, RegionState, Status};
use crate::tui::component::Component;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct OutcomeBanner<'a> {
    pub region: Region,
    pub state: &'a RegionState,
    pub spinner_frame: usize,
}

impl<'a> OutcomeBanner<'a> {
    pub fn new(region: Region, state: &'a RegionState, spinner_frame: usize) -> Self {
        Self {
            region,
            state,
            spinner_frame,
        }
    }

    fn title(&self) -> String {
        match self.state.phase {
            Phase::Pending => format!(
                " {} {} ",
                self.region.label(),
                SPINNER[self.spinner_frame % SPINNER.len()]
            ),
            _ => format!(" {} ", self.region.label()),
        }
    }
}

impl Component for OutcomeBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text, style) = match &self.state.outcome {
            Some(outcome) => {
                let style = match outcome.status {
                    Status::Success => Style::default().fg(Color::Green),
                    Status::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                };
                (outcome.message.as_str(), style)
            }
            None => ("", Style::default()),
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(self.title()),
            );
        frame.render_widget(paragraph, area);
    }
}
