//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::texts::t;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据弹窗状态和焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 播报区域对视觉隐藏，仅在开启读屏模式时镜像到状态栏
    if let Some(text) = announcement(app) {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} {text}", t().status.screen_reader_prefix),
            Style::default().fg(Color::White),
        ));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 需要镜像的播报文本
fn announcement(app: &App) -> Option<&str> {
    if !app.config.screen_reader || !app.controller.is_open() {
        return None;
    }
    let text = app.controller.live_region().text();
    (!text.is_empty()).then_some(text)
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    if app.controller.is_open() {
        return vec![
            ("Tab/S-Tab", hints.next_field),
            ("←→", hints.choose),
            ("Enter", hints.submit),
            ("Esc", hints.cancel),
        ];
    }

    let mut list = vec![("Tab", hints.switch_focus)];
    match app.focus() {
        Some(FocusPanel::Trigger) | None => list.push(("Enter", hints.open_form)),
        Some(FocusPanel::Submissions) => list.push(("↑↓", hints.scroll)),
    }
    list.push(("Alt+n", hints.open_form));
    list.push(("q", hints.quit));
    list
}
