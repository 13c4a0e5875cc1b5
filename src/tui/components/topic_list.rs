//! # Topic List Component
//!
//! Left-hand panel listing topic ARNs in server order. Up/Down move the
//! highlight, Ctrl+T hands the highlighted topic to the controller as the
//! pending input for the next submission.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TopicListState` lives in `TuiState`
//! - `TopicList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::api::TopicReference;
use crate::core::state::TopicListView;
use crate::tui::event::TuiEvent;

/// Persistent state for the topic list.
#[derive(Default)]
pub struct TopicListState {
    pub list_state: ListState,
}

/// Events emitted by the topic list.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicEvent {
    Select(TopicReference),
}

impl TopicListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against the topics currently shown.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        topics: &[TopicReference],
    ) -> Option<TopicEvent> {
        if topics.is_empty() {
            self.list_state.select(None);
            return None;
        }
        let last = topics.len() - 1;
        let current = self.list_state.selected().map(|i| i.min(last));
        match event {
            TuiEvent::CursorUp => {
                self.list_state
                    .select(Some(current.map(|i| i.saturating_sub(1)).unwrap_or(last)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state
                    .select(Some(current.map(|i| (i + 1).min(last)).unwrap_or(0)));
                None
            }
            TuiEvent::UseTopic => current
                .and_then(|i| topics.get(i))
                .map(|topic| TopicEvent::Select(topic.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the topic list.
pub struct TopicList<'a> {
    view: &'a TopicListView,
    state: &'a mut TopicListState,
    pending: Option<&'a str>,
}

impl<'a> TopicList<'a> {
    pub fn new(
        view: &'a TopicListView,
        state: &'a mut TopicListState,
        pending: Option<&'a str>,
    ) -> Self {
        Self {
            view,
            state,
            pending,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Topics ")
            .title_bottom(Line::from(" ↑↓ Move  Ctrl+T Use ").centered());

        if let Some(placeholder) = self.view.placeholder() {
            let style = match self.view {
                TopicListView::Unavailable => Style::default().fg(Color::Red),
                _ => Style::default().fg(Color::DarkGray),
            };
            let empty = Paragraph::new(placeholder)
                .style(style)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .view
            .topics()
            .iter()
            .map(|topic| {
                let selected = self.pending == Some(topic.as_str());
                let marker = if selected { "* " } else { "  " };
                let style = if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(topic.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn topics() -> Vec<TopicReference> {
        vec!["arn:b".to_string(), "arn:a".to_string(), "arn:c".to_string()]
    }

    fn render(view: &TopicListView) -> String {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TopicListState::new();
        terminal
            .draw(|f| TopicList::new(view, &mut state, None).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_navigation_clamps() {
        let topics = topics();
        let mut state = TopicListState::new();
        state.handle_event(&TuiEvent::CursorDown, &topics);
        assert_eq!(state.list_state.selected(), Some(0));
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown, &topics);
        }
        assert_eq!(state.list_state.selected(), Some(2));
        state.handle_event(&TuiEvent::CursorUp, &topics);
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_use_topic_emits_highlighted() {
        let topics = topics();
        let mut state = TopicListState::new();
        assert_eq!(state.handle_event(&TuiEvent::UseTopic, &topics), None);

        state.handle_event(&TuiEvent::CursorDown, &topics);
        state.handle_event(&TuiEvent::CursorDown, &topics);
        assert_eq!(
            state.handle_event(&TuiEvent::UseTopic, &topics),
            Some(TopicEvent::Select("arn:a".to_string()))
        );
    }

    #[test]
    fn test_empty_list_clears_selection() {
        let mut state = TopicListState::new();
        state.list_state.select(Some(3));
        assert_eq!(state.handle_event(&TuiEvent::UseTopic, &[]), None);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let text = render(&TopicListView::Empty);
        assert!(text.contains("No topics found"));
    }

    #[test]
    fn test_loading_renders_placeholder() {
        let text = render(&TopicListView::Loading);
        assert!(text.contains("Please wait..."));
    }

    #[test]
    fn test_loaded_renders_in_server_order() {
        let text = render(&TopicListView::Loaded(topics()));
        let b = text.find("arn:b").unwrap();
        let a = text.find("arn:a").unwrap();
        let c = text.find("arn:c").unwrap();
        assert!(b < a && a < c);
    }
}
