//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use apply_form_core::{ClickTarget, Field, FocusId};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, FocusPanel};
use crate::view::components::modal::DialogLayout;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗打开时，按键全部交给弹窗
    if app.controller.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::OPEN_FORM.matches(&key) {
        return AppMessage::OpenForm;
    }

    if DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    match app.focus() {
        Some(FocusPanel::Trigger) => handle_trigger_keys(key),
        Some(FocusPanel::Submissions) => handle_list_keys(key, app),
        None => AppMessage::Noop,
    }
}

/// 处理触发按钮的按键
fn handle_trigger_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::OpenForm,
        _ => AppMessage::Noop,
    }
}

/// 处理申请列表的按键
fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 背景滚动被挂起
    if app.host.is_scroll_locked() {
        return AppMessage::Noop;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::MODAL_CANCEL.matches(&key) {
        return AppMessage::Modal(ModalMessage::Cancel);
    }

    match key.code {
        KeyCode::Esc => return AppMessage::Modal(ModalMessage::Escape),
        // 部分终端为 Shift+Tab 同时上报 SHIFT 修饰键，只看键码
        KeyCode::BackTab => return AppMessage::Modal(ModalMessage::PrevFocus),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            return AppMessage::Modal(ModalMessage::PrevFocus);
        }
        KeyCode::Tab => return AppMessage::Modal(ModalMessage::NextFocus),
        _ => {}
    }

    match app.controller.focused() {
        Some(FocusId::CancelButton) => handle_button_keys(key, ModalMessage::Cancel),
        Some(FocusId::SubmitButton) => handle_button_keys(key, ModalMessage::Submit),
        Some(FocusId::Field(Field::Experience)) => handle_select_keys(key),
        Some(FocusId::Field(_)) => handle_text_keys(key),
        Some(FocusId::Heading) | None => AppMessage::Noop,
    }
}

/// 按钮：Enter / Space 激活
fn handle_button_keys(key: KeyEvent, activate: ModalMessage) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Modal(activate),
        _ => AppMessage::Noop,
    }
}

/// 经验年限下拉
fn handle_select_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevOption),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
            AppMessage::Modal(ModalMessage::NextOption)
        }
        // 表单内回车即提交
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Submit),
        _ => AppMessage::Noop,
    }
}

/// 文本字段
fn handle_text_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Submit),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if !app.controller.is_open() {
        return match mouse.kind {
            MouseEventKind::ScrollUp if app.focus().is_some_and(FocusPanel::is_submissions) => {
                AppMessage::Content(ContentMessage::SelectPrevious)
            }
            MouseEventKind::ScrollDown if app.focus().is_some_and(FocusPanel::is_submissions) => {
                AppMessage::Content(ContentMessage::SelectNext)
            }
            _ => AppMessage::Noop,
        };
    }

    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppMessage::Noop;
    }

    let position = Position::new(mouse.column, mouse.row);
    let layout = DialogLayout::compute(app.viewport);
    if !layout.dialog.contains(position) {
        return AppMessage::Modal(ModalMessage::Click(ClickTarget::Overlay));
    }

    let registry = app.controller.focus_registry();
    match layout.element_at(position) {
        Some(id) if id.is_button() && registry.is_disabled(id) => AppMessage::Noop,
        Some(FocusId::CancelButton) => AppMessage::Modal(ModalMessage::Cancel),
        Some(FocusId::SubmitButton) => AppMessage::Modal(ModalMessage::Submit),
        Some(id) => AppMessage::Modal(ModalMessage::FocusOn(id)),
        None => AppMessage::Modal(ModalMessage::Click(ClickTarget::Dialog)),
    }
}
