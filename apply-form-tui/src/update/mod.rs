//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ Tick      │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 读取配置          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   apply-form-     │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 申请列表子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//!         主更新函数使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//!         弹窗相关的子消息委托给 modal.rs，由它驱动 ModalController。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗结果的收取
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     OpenForm 时，`controller.open()` 返回一个 PendingResult，存入 `app.pending`。
//!     触发按钮这一侧就是它的调用方：
//!
//!         Some(FormData)  → 追加到申请列表，状态栏提示已收到
//!         None            → 状态栏提示已取消
//!         Abandoned       → 控制器在结算前被丢弃（记录错误日志）
//!
//!     每次弹窗消息处理后以及每个 Tick 都会尝试收取一次，
//!     Tick 同时驱动提交成功后的延迟关闭。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use std::time::Instant;

use crate::message::AppMessage;
use crate::model::App;
use crate::texts::t;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 弹窗打开时宿主页面没有焦点
            if let Some(panel) = app.focus() {
                app.set_focus(panel.toggle());
            }
        }

        AppMessage::OpenForm => {
            open_form(app);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            collect_result(app);
        }

        AppMessage::Tick => {
            tick_at(app, Instant::now());
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 打开申请表单
fn open_form(app: &mut App) {
    match app.controller.open() {
        Ok(pending) => {
            app.pending = Some(pending);
            app.clear_status();
        }
        Err(err) => {
            log::warn!("Failed to open the application form: {err}");
            app.set_status(t().status.already_open);
        }
    }
}

/// 推进时钟：延迟关闭到期则关闭，并收取结果
fn tick_at(app: &mut App, now: Instant) {
    app.controller.tick(now);
    collect_result(app);
}

/// 收取已结算的弹窗结果
fn collect_result(app: &mut App) {
    let Some(result) = app.pending.as_mut().and_then(|pending| pending.try_take()) else {
        return;
    };
    app.pending = None;

    match result {
        Ok(Some(data)) => {
            log::info!(
                "Application received ({} so far)",
                app.submissions.items.len() + 1
            );
            app.set_status(format!("{} {}", t().status.received, data.name.trim()));
            app.submissions.push(data);
        }
        Ok(None) => {
            app.set_status(t().status.cancelled);
        }
        Err(err) => {
            log::error!("Application form result lost: {err}");
            app.set_status(t().status.result_lost);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use apply_form_core::{ClickTarget, Field, FocusId};

    use super::*;
    use crate::backend::AppConfig;
    use crate::message::{ContentMessage, ModalMessage};
    use crate::model::FocusPanel;

    fn modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            modal(app, ModalMessage::Input(ch));
        }
    }

    fn opened() -> App {
        let mut app = App::new(AppConfig::default());
        update(&mut app, AppMessage::OpenForm);
        app.controller.after_render();
        app
    }

    #[test]
    fn filling_and_submitting_records_the_application() {
        let mut app = opened();
        assert_eq!(app.focus(), None);

        modal(&mut app, ModalMessage::NextFocus);
        assert_eq!(app.controller.focused(), Some(FocusId::Field(Field::Name)));
        type_text(&mut app, "Alice");

        modal(&mut app, ModalMessage::NextFocus);
        type_text(&mut app, "alice@example.com");

        modal(&mut app, ModalMessage::NextFocus);
        modal(&mut app, ModalMessage::NextOption);
        modal(&mut app, ModalMessage::NextOption);
        assert_eq!(app.controller.form().experience, "1");

        modal(&mut app, ModalMessage::Submit);

        // 结果立即结算，弹窗仍在等待延迟关闭
        assert_eq!(app.submissions.items.len(), 1);
        assert_eq!(app.submissions.items[0].data.name, "Alice");
        assert!(app.pending.is_none());
        assert!(app.controller.is_submitting());
        assert!(app.status_message.as_deref().is_some_and(|s| s.ends_with("Alice")));

        tick_at(&mut app, Instant::now());
        assert!(app.controller.is_open());

        tick_at(&mut app, Instant::now() + Duration::from_millis(1000));
        assert!(!app.controller.is_open());
        assert_eq!(app.focus(), Some(FocusPanel::Trigger));
        assert!(!app.host.is_scroll_locked());
    }

    #[test]
    fn invalid_submit_keeps_the_form_open() {
        let mut app = opened();
        modal(&mut app, ModalMessage::Submit);

        assert!(app.controller.is_open());
        assert!(app.pending.is_some());
        assert_eq!(app.controller.focused(), Some(FocusId::Field(Field::Name)));
        assert!(app.submissions.items.is_empty());

        // 输入清除该字段的错误
        type_text(&mut app, "A");
        assert!(!app.controller.errors().contains(Field::Name));
        assert!(app.controller.errors().contains(Field::Email));
    }

    #[test]
    fn escape_resolves_with_none() {
        let mut app = opened();
        let pending = app.pending.take().unwrap();

        modal(&mut app, ModalMessage::Escape);

        assert_eq!(tokio_test::block_on(pending), Ok(None));
        assert!(!app.controller.is_open());
        assert_eq!(app.focus(), Some(FocusPanel::Trigger));
    }

    #[test]
    fn cancel_reports_status() {
        let mut app = opened();
        modal(&mut app, ModalMessage::Click(ClickTarget::Dialog));
        assert!(app.controller.is_open());

        modal(&mut app, ModalMessage::Click(ClickTarget::Overlay));
        assert!(!app.controller.is_open());
        assert!(app.pending.is_none());
        assert_eq!(app.status_message.as_deref(), Some(t().status.cancelled));
    }

    #[test]
    fn second_open_is_rejected_with_status() {
        let mut app = opened();
        update(&mut app, AppMessage::OpenForm);

        assert_eq!(app.status_message.as_deref(), Some(t().status.already_open));
        // 第一个会话的结果句柄仍然有效
        assert!(app.pending.as_mut().unwrap().try_take().is_none());
    }

    #[test]
    fn teardown_settles_pending_with_none() {
        let mut app = opened();
        app.controller.teardown();
        collect_result(&mut app);

        assert!(app.pending.is_none());
        assert_eq!(app.status_message.as_deref(), Some(t().status.cancelled));
        assert!(!app.host.is_scroll_locked());
    }

    #[test]
    fn host_focus_toggles_only_when_closed() {
        let mut app = App::new(AppConfig::default());
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus(), Some(FocusPanel::Submissions));

        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::OpenForm);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus(), None);
    }

    #[test]
    fn list_does_not_scroll_while_locked() {
        let mut app = App::new(AppConfig::default());
        for name in ["a", "b", "c"] {
            app.submissions.push(apply_form_core::FormData {
                name: name.to_string(),
                ..Default::default()
            });
        }
        update(&mut app, AppMessage::Content(ContentMessage::SelectFirst));
        assert_eq!(app.submissions.selected, 0);

        update(&mut app, AppMessage::OpenForm);
        update(&mut app, AppMessage::Content(ContentMessage::SelectLast));
        assert_eq!(app.submissions.selected, 0);
    }
}
