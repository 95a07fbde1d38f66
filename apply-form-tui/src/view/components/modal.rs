//! 申请表单弹窗组件
//!
//! 布局由 [`DialogLayout`] 统一计算，渲染与鼠标命中测试共用同一份坐标。

use apply_form_core::{experience_label, Field, FieldErrors, FocusId, ModalController};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::texts::t;
use crate::view::theme::{colors, Styles};

/// 对话框宽度
const DIALOG_WIDTH: u16 = 64;
/// 对话框高度：标题(1) + 说明(2) + 空行(1) + 字段(4×3) + 空行(1) + 按钮(1) + 边框(2)
const DIALOG_HEIGHT: u16 = 20;
/// 每个字段占用的行数：标签 + 输入 + 错误
const FIELD_ROWS: u16 = 3;
/// 输入行的缩进
const INPUT_INDENT: u16 = 2;
/// 按钮之间的间距
const BUTTON_GAP: u16 = 2;

/// 单个字段的三行区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRows {
    pub field: Field,
    pub label: Rect,
    pub input: Rect,
    pub error: Rect,
}

/// 对话框各元素的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub dialog: Rect,
    pub heading: Rect,
    pub description: Rect,
    pub fields: [FieldRows; 4],
    pub cancel: Rect,
    pub submit: Rect,
}

impl DialogLayout {
    /// 在给定终端区域内计算对话框布局
    pub fn compute(area: Rect) -> Self {
        let dialog = dialog_area(area);
        let inner = Rect::new(
            dialog.x + 2,
            dialog.y + 1,
            dialog.width.saturating_sub(4),
            dialog.height.saturating_sub(2),
        );
        let row = |offset: u16, height: u16| {
            let y = inner.y.saturating_add(offset);
            clip(Rect::new(inner.x, y, inner.width, height), inner)
        };

        let heading = row(0, 1);
        let description = row(1, 2);
        let fields = Field::ALL.map(|field| {
            let top = 4 + field_index(field) * FIELD_ROWS;
            FieldRows {
                field,
                label: row(top, 1),
                input: row(top + 1, 1),
                error: row(top + 2, 1),
            }
        });

        let buttons = row(4 + 4 * FIELD_ROWS + 1, 1);
        let submit_width = button_width(t().modal.submit).max(button_width(t().modal.submitting));
        let cancel_width = button_width(t().modal.cancel);
        let submit_x = buttons.right().saturating_sub(submit_width);
        let cancel_x = submit_x.saturating_sub(BUTTON_GAP + cancel_width);
        let submit = clip(Rect::new(submit_x, buttons.y, submit_width, buttons.height), buttons);
        let cancel = clip(Rect::new(cancel_x, buttons.y, cancel_width, buttons.height), buttons);

        Self {
            dialog,
            heading,
            description,
            fields,
            cancel,
            submit,
        }
    }

    pub fn field(&self, field: Field) -> &FieldRows {
        &self.fields[usize::from(field_index(field))]
    }

    /// 对话框内某一点对应的可聚焦元素
    pub fn element_at(&self, position: Position) -> Option<FocusId> {
        if self.heading.contains(position) {
            return Some(FocusId::Heading);
        }
        if self.cancel.contains(position) {
            return Some(FocusId::CancelButton);
        }
        if self.submit.contains(position) {
            return Some(FocusId::SubmitButton);
        }
        self.fields
            .iter()
            .find(|rows| rows.label.contains(position) || rows.input.contains(position))
            .map(|rows| FocusId::Field(rows.field))
    }
}

/// 对话框在终端中的位置
pub fn dialog_area(area: Rect) -> Rect {
    centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area)
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 限制在容器内，终端过小时元素高度可能为 0
fn clip(rect: Rect, bounds: Rect) -> Rect {
    rect.intersection(bounds)
}

fn field_index(field: Field) -> u16 {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Experience => 2,
        Field::Github => 3,
    }
}

fn button_width(label: &str) -> u16 {
    u16::try_from(label.width() + 4).unwrap_or(u16::MAX)
}

fn field_label(field: Field) -> &'static str {
    let texts = &t().modal;
    match field {
        Field::Name => texts.name_label,
        Field::Email => texts.email_label,
        Field::Experience => texts.experience_label,
        Field::Github => texts.github_label,
    }
}

/// 渲染弹窗（如果已打开）
pub fn render(app: &App, frame: &mut Frame) {
    let controller = &app.controller;
    if !controller.is_open() {
        return;
    }

    let texts = &t().modal;
    let c = colors();
    let area = frame.area();
    let layout = DialogLayout::compute(area);

    // 遮罩：背景变暗
    frame
        .buffer_mut()
        .set_style(area, Style::default().fg(c.muted).add_modifier(Modifier::DIM));

    frame.render_widget(Clear, layout.dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg));
    frame.render_widget(block, layout.dialog);

    let focused = controller.focused();

    // === 标题 ===
    let mut heading_style = Styles::title();
    if focused == Some(FocusId::Heading) {
        heading_style = heading_style.add_modifier(Modifier::UNDERLINED);
    }
    frame.render_widget(
        Paragraph::new(texts.heading)
            .style(heading_style)
            .alignment(Alignment::Center),
        layout.heading,
    );

    // === 说明 ===
    frame.render_widget(
        Paragraph::new(texts.description)
            .style(Style::default().fg(c.muted))
            .wrap(Wrap { trim: true }),
        layout.description,
    );

    // === 字段 ===
    for rows in &layout.fields {
        render_field(frame, controller, rows, focused);
    }

    // === 按钮 ===
    render_buttons(frame, controller, &layout, focused);
}

/// 渲染单个字段：标签、输入、内联错误
fn render_field(
    frame: &mut Frame,
    controller: &ModalController,
    rows: &FieldRows,
    focused: Option<FocusId>,
) {
    let texts = &t().modal;
    let c = colors();
    let field = rows.field;
    let errors: &FieldErrors = controller.errors();
    let error = errors.get(field);
    let is_focused = focused == Some(FocusId::Field(field));

    // 标签
    let label_style = if error.is_some() {
        Styles::error()
    } else if is_focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let mut label = vec![Span::styled(field_label(field), label_style)];
    if field.is_required() {
        label.push(Span::styled(texts.required_mark, Styles::error()));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), rows.label);

    // 输入
    let value = controller.form().get(field);
    let input_style = if is_focused {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg)
    };
    let placeholder_style = Style::default().fg(c.muted);
    let available = usize::from(rows.input.width.saturating_sub(INPUT_INDENT + 1));

    let line = if field.is_text_input() {
        if value.is_empty() && field == Field::Github && !is_focused {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(texts.github_placeholder, placeholder_style),
            ])
        } else {
            let visible = tail_to_width(value, available);
            if is_focused {
                let cursor_x = rows
                    .input
                    .x
                    .saturating_add(INPUT_INDENT)
                    .saturating_add(u16::try_from(visible.width()).unwrap_or(u16::MAX));
                if rows.input.height > 0 && cursor_x < rows.input.right() {
                    frame.set_cursor_position(Position::new(cursor_x, rows.input.y));
                }
            }
            Line::from(vec![Span::raw("  "), Span::styled(visible, input_style)])
        }
    } else {
        let (text, style) = match experience_label(value) {
            Some(label) => (label, input_style),
            None => (texts.experience_placeholder, placeholder_style),
        };
        let (left, right) = if is_focused { ("◀ ", " ▶") } else { ("  ", "  ") };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(left, Style::default().fg(c.highlight)),
            Span::styled(text, style),
            Span::styled(right, Style::default().fg(c.highlight)),
        ])
    };
    frame.render_widget(Paragraph::new(line), rows.input);

    // 内联错误
    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Line::styled(format!("  {message}"), Styles::error())),
            rows.error,
        );
    }
}

/// 渲染取消与提交按钮
fn render_buttons(
    frame: &mut Frame,
    controller: &ModalController,
    layout: &DialogLayout,
    focused: Option<FocusId>,
) {
    let texts = &t().modal;
    let submit_label = if controller.is_submitting() {
        texts.submitting
    } else {
        texts.submit
    };

    for (id, label, area) in [
        (FocusId::CancelButton, texts.cancel, layout.cancel),
        (FocusId::SubmitButton, submit_label, layout.submit),
    ] {
        let disabled = controller.focus_registry().is_disabled(id);
        let style = button_style(id, focused == Some(id), disabled);
        frame.render_widget(
            Paragraph::new(format!("[ {label} ]"))
                .style(style)
                .alignment(Alignment::Center),
            area,
        );
    }
}

fn button_style(id: FocusId, is_focused: bool, disabled: bool) -> Style {
    let c = colors();
    if disabled {
        return Style::default().fg(c.muted).add_modifier(Modifier::DIM);
    }
    let base = match id {
        FocusId::SubmitButton => Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(c.fg),
    };
    if is_focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

/// 取字符串末尾不超过 `max_width` 列的部分
fn tail_to_width(value: &str, max_width: usize) -> &str {
    if value.width() <= max_width {
        return value;
    }
    let mut width = 0;
    let mut start = value.len();
    for (index, ch) in value.char_indices().rev() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = index;
    }
    &value[start..]
}
