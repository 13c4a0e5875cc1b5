use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};

use crate::core::form::{FormKind, TOPIC_ARN};
use crate::core::outcome::Region;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::confirm_dialog::DELETE_PROMPT;
use crate::tui::components::{ConfirmDialog, FormPanel, OutcomeBanner, TitleBar, TopicList};

const HELP: &str =
    " F1-F4 Form  Tab Field  Enter Submit  ↑↓ Topics  Ctrl+T Use topic  Ctrl+R Refresh  Esc Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [left_area, right_area] =
        Layout::horizontal([Percentage(40), Percentage(60)]).areas(body_area);

    TitleBar::new(app.endpoint.clone(), app.pending_topic.clone()).render(frame, title_area);

    // Topics column
    let [list_area, list_outcome_area] = Layout::vertical([Min(3), Length(4)]).areas(left_area);
    TopicList::new(&app.topics, &mut tui.topic_list, app.pending_topic.as_deref())
        .render(frame, list_area);
    OutcomeBanner::new(
        Region::TopicList,
        app.region(Region::TopicList),
        spinner_frame,
    )
    .render(frame, list_outcome_area);

    // Active form column
    let form = app.form(tui.active_form);
    let [tabs_area, form_area, outcome_area] = Layout::vertical([
        Length(1),
        Length(FormPanel::required_height(form)),
        Min(3),
    ])
    .areas(right_area);
    draw_tabs(frame, tabs_area, tui.active_form);
    FormPanel::new(form, tui.focused_field).render(frame, form_area);
    OutcomeBanner::new(
        tui.active_form.region(),
        app.region(tui.active_form.region()),
        spinner_frame,
    )
    .render(frame, outcome_area);

    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if app.confirming_delete {
        let subject = delete_subject(app);
        ConfirmDialog::new(DELETE_PROMPT, &subject).render(frame, frame.area());
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: FormKind) {
    let titles: Vec<Line> = FormKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Line::from(format!("F{} {}", i + 1, kind.label())))
        .collect();
    let selected = FormKind::ALL
        .iter()
        .position(|k| *k == active)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, area);
}

/// The topic a confirmed delete would target.
fn delete_subject(app: &App) -> String {
    let typed = app
        .form(FormKind::DeleteTopic)
        .field(TOPIC_ARN)
        .map(|f| f.value.trim().to_string())
        .unwrap_or_default();
    if typed.is_empty() {
        app.pending_topic.clone().unwrap_or_default()
    } else {
        typed
    }
}
