//! 首页视图
//!
//! 触发按钮 + 已收到的申请列表。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use apply_form_core::experience_label;

use crate::model::state::Submission;
use crate::model::{App, FocusPanel};
use crate::texts::t;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 触发按钮
            Constraint::Min(1),    // 申请列表
        ])
        .split(area);

    render_trigger(app, frame, layout[0]);
    render_submissions(app, frame, layout[1]);
}

/// 渲染触发按钮
fn render_trigger(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let c = colors();
    let focused = app.focus().is_some_and(FocusPanel::is_trigger);

    let button_style = if focused {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", texts.trigger_label), button_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.trigger_description),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染申请列表
fn render_submissions(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let c = colors();
    let focused = app.focus().is_some_and(FocusPanel::is_submissions);

    let mut title = texts.submissions_title.to_string();
    if app.host.is_scroll_locked() {
        title.push_str(texts.scroll_locked);
        title.push(' ');
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { c.border_focused } else { c.border }));

    let submissions = &app.submissions;
    if submissions.items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                format!("  {}", texts.no_submissions),
                Style::default().fg(Color::Gray),
            ),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = submissions.items.iter().map(submission_item).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(submissions.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// 单条申请的列表项
fn submission_item(submission: &Submission) -> ListItem<'static> {
    let c = colors();
    let data = &submission.data;
    let experience = experience_label(&data.experience).unwrap_or("-");

    let mut spans = vec![
        Span::styled(
            submission.received_at.format("%H:%M:%S ").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(data.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" <{}> ", data.email)),
        Span::styled(format!("[{experience}]"), Style::default().fg(c.success)),
    ];
    if !data.github.is_empty() {
        spans.push(Span::styled(
            format!(" {}", data.github),
            Style::default().fg(c.muted),
        ));
    }
    ListItem::new(Line::from(spans))
}
