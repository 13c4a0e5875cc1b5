//! # TitleBar Component
//!
//! Top status bar showing which service we talk to and the topic currently
//! held as pending input.
//!
//! Stateless: all data comes in as props, so it can be built fresh each frame.
//!
//! 1. **Pending topic**: `"snsdesk (http://localhost:8080) | topic: arn:..."`
//! 2. **Default**: `"snsdesk (http://localhost:8080)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Base URL of the notification service
    pub endpoint: String,
    /// Topic stored for the next submission, if any
    pub pending_topic: Option<String>,
}

impl TitleBar {
    pub fn new(endpoint: String, pending_topic: Option<String>) -> Self {
        Self {
            endpoint,
            pending_topic,
        }
    }

    fn text(&self) -> String {
        match &self.pending_topic {
            Some(topic) => format!("snsdesk ({}) | topic: {}", self.endpoint, topic),
            None => format!("snsdesk ({})", self.endpoint),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::White).bg(Color::Blue));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_pending_topic() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8080".to_string(),
            Some("arn:aws:sns:us-east-1:1:orders".to_string()),
        );
        let text = render(&mut title_bar);
        assert!(text.contains("snsdesk (http://localhost:8080)"));
        assert!(text.contains("topic: arn:aws:sns:us-east-1:1:orders"));
    }

    #[test]
    fn test_title_bar_default_no_topic() {
        let mut title_bar = TitleBar::new("http://localhost:8080".to_string(), None);
        let text = render(&mut title_bar);
        assert!(text.contains("snsdesk"));
        assert!(!text.contains('|'));
    }
}
