//! 弹窗生命周期控制器
//!
//! 拥有开/关状态与待定结果，并在打开、提交、取消、卸载时协调
//! 校验、焦点陷阱与播报区域。
//!
//! 状态流转：
//!
//! ```text
//!   Closed ──open()──▶ Open ──submit() 通过──▶ Submitting ──tick() 到期──▶ Closed
//!                       │  ▲                        │
//!                       │  └── submit() 有错误 ──┘   │
//!                       └──── cancel() / Esc / 点击遮罩 ───┴──────────────▶ Closed
//! ```
//!
//! 结果在每个会话内至多结算一次：提交成功或取消，先到者生效。

mod pending;

use std::rc::Rc;
use std::time::Instant;

use uuid::Uuid;

use crate::announce::{error_announcement, LiveRegion};
use crate::config::ModalConfig;
use crate::error::{ModalError, ModalResult};
use crate::focus::{FocusId, FocusRegistry, FocusTrap, TrapKey, TrapOutcome};
use crate::host::{HostDocument, ScrollLock};
use crate::types::{ExperienceOption, Field, FormData};
use crate::validation::{validate, FieldErrors};
use crate::view;

pub use pending::PendingResult;
use pending::Resolver;

/// 弹窗状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    /// 已提交成功，等待延迟关闭
    Submitting,
}

/// 点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 遮罩本身
    Overlay,
    /// 对话框或其子元素
    Dialog,
}

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 校验失败，焦点移到第一个出错字段
    Invalid { first_invalid: Field },
    /// 结果已结算，等待延迟关闭
    Accepted,
    /// 没有打开的会话或已在提交中
    Ignored,
}

/// 一次打开到关闭的会话
#[derive(Debug)]
struct Session {
    id: Uuid,
    resolver: Resolver,
    /// 打开前宿主侧的焦点元素
    restore_focus: Option<String>,
    /// 延迟关闭的截止时间
    close_at: Option<Instant>,
    _scroll_lock: ScrollLock,
}

/// 弹窗控制器
#[derive(Debug)]
pub struct ModalController {
    config: ModalConfig,
    host: Rc<HostDocument>,
    state: ModalState,
    session: Option<Session>,
    form: FormData,
    errors: FieldErrors,
    focus: FocusRegistry,
    trap: FocusTrap,
    live_region: LiveRegion,
    /// 渲染完成后才执行的焦点移动
    deferred_focus: Option<FocusId>,
}

impl ModalController {
    pub fn new(host: Rc<HostDocument>, config: ModalConfig) -> Self {
        Self {
            config,
            host,
            state: ModalState::Closed,
            session: None,
            form: FormData::default(),
            errors: FieldErrors::new(),
            focus: FocusRegistry::new(),
            trap: FocusTrap::new(),
            live_region: LiveRegion::polite(),
            deferred_focus: None,
        }
    }

    /// 打开弹窗
    ///
    /// 已有会话时拒绝，避免前一个调用方的结果被悄悄丢弃。
    pub fn open(&mut self) -> ModalResult<PendingResult> {
        if self.session.is_some() {
            log::warn!("Rejected open: a form session is already active");
            return Err(ModalError::SessionPending);
        }

        let (resolver, pending) = pending::channel();
        let id = Uuid::new_v4();
        let restore_focus = self.host.active_element();

        self.session = Some(Session {
            id,
            resolver,
            restore_focus,
            close_at: None,
            _scroll_lock: ScrollLock::acquire(&self.host),
        });
        self.trap.activate(&self.host);
        self.host.blur();

        self.form = FormData::default();
        self.errors.clear();
        self.live_region.clear();
        self.focus.clear();
        view::register_focusables(&mut self.focus);
        // 标题在下一次渲染后才存在
        self.deferred_focus = Some(FocusId::Heading);
        self.state = ModalState::Open;

        log::info!("Form session {id} opened");
        Ok(pending)
    }

    /// 渲染完成后调用，执行延迟的焦点移动
    pub fn after_render(&mut self) {
        if let Some(target) = self.deferred_focus.take() {
            if self.session.is_some() {
                self.focus.focus(target);
            }
        }
    }

    /// 提交表单
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Instant::now())
    }

    /// 以指定时间提交（延迟关闭从 `now` 起算）
    pub fn submit_at(&mut self, now: Instant) -> SubmitOutcome {
        if self.state != ModalState::Open {
            return SubmitOutcome::Ignored;
        }

        let errors = validate(&self.form);
        if let Some(first_invalid) = errors.first_invalid() {
            self.live_region
                .announce(error_announcement(&self.config.error_prefix, &errors));
            self.errors = errors;
            self.focus.focus(FocusId::Field(first_invalid));
            log::debug!("Form submission rejected, first invalid field: {first_invalid:?}");
            return SubmitOutcome::Invalid { first_invalid };
        }

        self.errors.clear();
        self.live_region.announce(self.config.success_message.clone());
        self.state = ModalState::Submitting;
        self.focus.set_disabled(FocusId::CancelButton, true);
        self.focus.set_disabled(FocusId::SubmitButton, true);

        let data = self.form.clone();
        let close_delay = self.config.close_delay;
        if let Some(session) = self.session.as_mut() {
            session.resolver.settle(Some(data));
            session.close_at = Some(now + close_delay);
            log::info!("Form session {} submitted", session.id);
        }

        SubmitOutcome::Accepted
    }

    /// 取消：立即以 `None` 结算并关闭
    ///
    /// 没有会话时什么也不做。
    pub fn cancel(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.resolver.settle(None) {
            log::info!("Form session {} cancelled", session.id);
        }
        self.close();
    }

    /// 点击：仅当目标是遮罩本身时取消
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Overlay {
            self.cancel();
        }
    }

    /// 文档级按键，经焦点陷阱处理
    pub fn handle_key(&mut self, key: TrapKey) -> TrapOutcome {
        let outcome = self.trap.handle_key(key, &mut self.focus);
        if outcome == TrapOutcome::Cancel {
            self.cancel();
        }
        outcome
    }

    /// 更新字段值，并清除该字段已有的错误
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.session.is_none() {
            return;
        }
        self.form.set(field, value);
        self.errors.clear_field(field);
    }

    /// 在当前获得焦点的文本字段末尾输入字符
    pub fn input_char(&mut self, ch: char) -> bool {
        let Some(field) = self.focused_text_field() else {
            return false;
        };
        let mut value = self.form.get(field).to_string();
        value.push(ch);
        self.update_field(field, value);
        true
    }

    /// 删除当前文本字段的最后一个字符；字段为空时不算一次输入
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.focused_text_field() else {
            return false;
        };
        let mut value = self.form.get(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.update_field(field, value);
        true
    }

    /// 焦点在经验年限上时切换选项（含未选择的占位项）
    pub fn cycle_option(&mut self, forward: bool) -> bool {
        if self.focused() != Some(FocusId::Field(Field::Experience)) {
            return false;
        }
        let next = ExperienceOption::cycle(&self.form.experience, forward);
        self.update_field(Field::Experience, next);
        true
    }

    /// 点击遮罩
    pub fn backdrop_click(&mut self) {
        self.click(ClickTarget::Overlay);
    }

    fn focused_text_field(&self) -> Option<Field> {
        if self.session.is_none() {
            return None;
        }
        self.focused()
            .and_then(FocusId::field)
            .filter(|field| field.is_text_input())
    }

    /// 视图直接聚焦某元素（如鼠标点击字段）
    pub fn focus(&mut self, id: FocusId) -> bool {
        self.session.is_some() && self.focus.focus(id)
    }

    /// 驱动延迟关闭计时器
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .session
            .as_ref()
            .and_then(|session| session.close_at)
            .is_some_and(|close_at| now >= close_at);
        if due && self.state == ModalState::Submitting {
            self.close();
        }
    }

    /// 强制卸载：抑制尚未触发的延迟关闭，未结算的结果以 `None` 结算
    pub fn teardown(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.close_at = None;
        if session.resolver.settle(None) {
            log::info!("Form session {} torn down before settlement", session.id);
        }
        self.close();
    }

    /// 关闭并重置；所有退出路径最终都到这里
    fn close(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        debug_assert!(session.resolver.is_settled());

        self.trap.deactivate();
        self.state = ModalState::Closed;
        self.form = FormData::default();
        self.errors.clear();
        self.focus.clear();
        self.deferred_focus = None;

        if let Some(target) = session.restore_focus.as_deref() {
            self.host.focus_element(target);
        }
        log::info!("Form session {} closed", session.id);
        // session 在此 drop，滚动锁随之释放
    }

    // ===== 视图读取 =====

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.state == ModalState::Submitting
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn focused(&self) -> Option<FocusId> {
        self.focus.active()
    }

    pub fn focus_registry(&self) -> &FocusRegistry {
        &self.focus
    }

    pub fn live_region(&self) -> &LiveRegion {
        &self.live_region
    }

    /// 延迟关闭的截止时间
    pub fn close_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|session| session.close_at)
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }
}

impl Drop for ModalController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::FutureExt;

    use super::*;
    use crate::validation::messages;

    const TRIGGER: &str = "trigger-button";

    fn setup() -> (Rc<HostDocument>, ModalController) {
        let host = HostDocument::new();
        host.focus_element(TRIGGER);
        let controller = ModalController::new(Rc::clone(&host), ModalConfig::default());
        (host, controller)
    }

    fn fill_valid(controller: &mut ModalController) -> FormData {
        controller.update_field(Field::Name, "Al");
        controller.update_field(Field::Email, "a@b.co");
        controller.update_field(Field::Experience, "1");
        controller.update_field(Field::Github, "https://github.com/foo");
        controller.form().clone()
    }

    #[tokio::test]
    async fn open_then_cancel_resolves_none() {
        let (host, mut controller) = setup();
        let pending = controller.open().unwrap();

        assert!(host.is_scroll_locked());
        assert_eq!(host.key_listener_count(), 1);
        assert_eq!(host.active_element(), None);

        controller.cancel();

        assert_eq!(pending.await, Ok(None));
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(!host.is_scroll_locked());
        assert_eq!(host.key_listener_count(), 0);
        assert_eq!(host.active_element().as_deref(), Some(TRIGGER));
    }

    #[test]
    fn cancel_twice_is_noop() {
        let (host, mut controller) = setup();
        let mut pending = controller.open().unwrap();

        controller.cancel();
        controller.cancel();

        assert_eq!(pending.try_take(), Some(Ok(None)));
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(!host.is_scroll_locked());
        assert_eq!(host.key_listener_count(), 0);
    }

    #[test]
    fn second_open_is_rejected() {
        let (host, mut controller) = setup();
        let mut first = controller.open().unwrap();

        assert_eq!(controller.open().unwrap_err(), ModalError::SessionPending);
        // 第一个会话不受影响
        assert!(first.try_take().is_none());
        assert_eq!(host.key_listener_count(), 1);

        controller.cancel();
        assert_eq!(first.try_take(), Some(Ok(None)));
        assert!(controller.open().is_ok());
    }

    #[test]
    fn heading_focus_is_deferred_until_render() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        assert_eq!(controller.focused(), None);

        controller.after_render();
        assert_eq!(controller.focused(), Some(FocusId::Heading));

        // 只执行一次
        controller.focus(FocusId::Field(Field::Email));
        controller.after_render();
        assert_eq!(controller.focused(), Some(FocusId::Field(Field::Email)));
    }

    #[test]
    fn invalid_submit_keeps_session_open() {
        let (host, mut controller) = setup();
        let mut pending = controller.open().unwrap();
        controller.after_render();
        controller.update_field(Field::Name, "Al");
        controller.update_field(Field::Github, "github.com/foo");

        let outcome = controller.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                first_invalid: Field::Email
            }
        );
        assert_eq!(controller.state(), ModalState::Open);
        assert_eq!(controller.focused(), Some(FocusId::Field(Field::Email)));
        assert!(controller.errors().contains(Field::Experience));
        assert!(controller.errors().contains(Field::Github));
        assert_eq!(
            controller.live_region().text(),
            format!(
                "input errors exist. {}, {}, {}",
                messages::EMAIL_REQUIRED,
                messages::EXPERIENCE_REQUIRED,
                messages::GITHUB_INVALID
            )
        );
        assert!(pending.try_take().is_none());
        assert!(host.is_scroll_locked());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        controller.submit();
        assert_eq!(controller.errors().len(), 3);

        controller.update_field(Field::Email, "a");
        assert!(!controller.errors().contains(Field::Email));
        assert!(controller.errors().contains(Field::Name));
        assert!(controller.errors().contains(Field::Experience));
    }

    #[tokio::test]
    async fn valid_submit_settles_then_closes_after_delay() {
        let (host, mut controller) = setup();
        let pending = controller.open().unwrap();
        controller.after_render();
        let submitted = fill_valid(&mut controller);

        let start = Instant::now();
        assert_eq!(controller.submit_at(start), SubmitOutcome::Accepted);
        assert_eq!(controller.state(), ModalState::Submitting);
        assert!(controller.errors().is_empty());
        assert_eq!(
            controller.live_region().text(),
            ModalConfig::default().success_message
        );
        assert!(controller.focus_registry().is_disabled(FocusId::SubmitButton));
        assert!(controller.focus_registry().is_disabled(FocusId::CancelButton));

        // 结果立即可用
        assert_eq!(pending.await, Ok(Some(submitted)));

        // 延迟未到，仍处于提交中
        controller.tick(start + Duration::from_millis(999));
        assert_eq!(controller.state(), ModalState::Submitting);
        assert!(host.is_scroll_locked());

        controller.tick(start + Duration::from_millis(1000));
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(controller.form().is_empty());
        assert!(!host.is_scroll_locked());
        assert_eq!(host.key_listener_count(), 0);
        assert_eq!(host.active_element().as_deref(), Some(TRIGGER));
    }

    #[test]
    fn submitted_data_is_a_copy() {
        let (_host, mut controller) = setup();
        let mut pending = controller.open().unwrap();
        let submitted = fill_valid(&mut controller);
        controller.submit();

        // 关闭前再修改也不影响已结算的结果
        controller.update_field(Field::Name, "Changed");

        assert_eq!(pending.try_take(), Some(Ok(Some(submitted))));
    }

    #[test]
    fn cancel_after_success_does_not_resettle() {
        let (host, mut controller) = setup();
        let mut pending = controller.open().unwrap();
        let submitted = fill_valid(&mut controller);
        controller.submit();

        controller.cancel();

        assert_eq!(pending.try_take(), Some(Ok(Some(submitted))));
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(!host.is_scroll_locked());
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        fill_valid(&mut controller);
        assert_eq!(controller.submit(), SubmitOutcome::Accepted);
        assert_eq!(controller.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn escape_closes_from_any_focus() {
        let (host, mut controller) = setup();
        let mut pending = controller.open().unwrap();
        controller.after_render();
        controller.focus(FocusId::Field(Field::Github));

        assert_eq!(controller.handle_key(TrapKey::Escape), TrapOutcome::Cancel);
        assert_eq!(pending.try_take(), Some(Ok(None)));
        assert_eq!(host.key_listener_count(), 0);

        // 关闭后按键不再被处理
        assert_eq!(controller.handle_key(TrapKey::Escape), TrapOutcome::Ignored);
    }

    #[test]
    fn tab_wraps_within_dialog() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        controller.after_render();

        controller.focus(FocusId::SubmitButton);
        assert_eq!(
            controller.handle_key(TrapKey::Tab),
            TrapOutcome::Wrapped(FocusId::Field(Field::Name))
        );
        assert_eq!(
            controller.handle_key(TrapKey::BackTab),
            TrapOutcome::Wrapped(FocusId::SubmitButton)
        );
    }

    #[test]
    fn backdrop_click_only_on_overlay() {
        let (_host, mut controller) = setup();
        let mut pending = controller.open().unwrap();

        controller.click(ClickTarget::Dialog);
        assert!(controller.is_open());
        assert!(pending.try_take().is_none());

        controller.click(ClickTarget::Overlay);
        assert!(!controller.is_open());
        assert_eq!(pending.try_take(), Some(Ok(None)));
    }

    #[test]
    fn teardown_suppresses_pending_close_timer() {
        let (host, mut controller) = setup();
        let mut pending = controller.open().unwrap();
        fill_valid(&mut controller);
        let start = Instant::now();
        controller.submit_at(start);

        controller.teardown();
        assert!(!host.is_scroll_locked());
        assert_eq!(controller.close_deadline(), None);

        // 计时器到期后不再产生任何效果
        controller.tick(start + Duration::from_secs(5));
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(matches!(pending.try_take(), Some(Ok(Some(_)))));
    }

    #[test]
    fn dropping_controller_releases_host_and_settles() {
        let (host, mut controller) = setup();
        let pending = controller.open().unwrap();
        drop(controller);

        assert!(!host.is_scroll_locked());
        assert_eq!(host.key_listener_count(), 0);
        assert_eq!(pending.now_or_never(), Some(Ok(None)));
    }

    #[test]
    fn rapid_open_close_never_double_registers() {
        let (host, mut controller) = setup();
        for _ in 0..5 {
            let _pending = controller.open().unwrap();
            assert_eq!(host.key_listener_count(), 1);
            assert!(host.is_scroll_locked());
            controller.cancel();
            assert_eq!(host.key_listener_count(), 0);
            assert!(!host.is_scroll_locked());
        }
    }

    #[test]
    fn typing_edits_only_the_focused_text_field() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        controller.after_render();

        // 标题获得焦点时输入无效
        assert!(!controller.input_char('x'));

        controller.focus(FocusId::Field(Field::Email));
        for ch in "a@b".chars() {
            assert!(controller.input_char(ch));
        }
        assert!(controller.backspace());
        assert_eq!(controller.form().email, "a@");
        assert!(controller.form().name.is_empty());

        controller.focus(FocusId::Field(Field::Experience));
        assert!(!controller.input_char('x'));
        assert!(controller.form().experience.is_empty());
    }

    #[test]
    fn backspace_on_empty_field_keeps_its_error() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        controller.submit();
        assert_eq!(controller.focused(), Some(FocusId::Field(Field::Name)));

        assert!(!controller.backspace());
        assert!(controller.errors().contains(Field::Name));
    }

    #[test]
    fn option_cycling_includes_the_placeholder() {
        let (_host, mut controller) = setup();
        let _pending = controller.open().unwrap();
        controller.submit();

        // 焦点不在下拉框上
        assert!(!controller.cycle_option(true));

        controller.focus(FocusId::Field(Field::Experience));
        assert!(controller.cycle_option(false));
        assert_eq!(controller.form().experience, "2+");
        assert!(!controller.errors().contains(Field::Experience));
        controller.cycle_option(true);
        assert_eq!(controller.form().experience, "");
        controller.cycle_option(true);
        assert_eq!(controller.form().experience, "0");
    }

    #[test]
    fn backdrop_click_cancels() {
        let (_host, mut controller) = setup();
        let mut pending = controller.open().unwrap();
        controller.backdrop_click();
        assert_eq!(pending.try_take(), Some(Ok(None)));
    }

    #[test]
    fn update_field_without_session_is_ignored() {
        let (_host, mut controller) = setup();
        controller.update_field(Field::Name, "ghost");
        assert!(controller.form().is_empty());
    }
}
