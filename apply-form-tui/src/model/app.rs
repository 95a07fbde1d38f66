//! 应用主状态结构

use std::rc::Rc;

use apply_form_core::{HostDocument, ModalController, PendingResult};
use ratatui::layout::Rect;

use super::{FocusPanel, SubmissionsState};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 宿主文档（滚动锁、按键监听、宿主侧焦点）
    pub host: Rc<HostDocument>,

    /// 申请表单弹窗控制器
    pub controller: ModalController,

    /// 等待中的弹窗结果（触发按钮的调用方持有）
    pub pending: Option<PendingResult>,

    /// 已收到的申请
    pub submissions: SubmissionsState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 应用配置
    pub config: AppConfig,

    /// 最近一次渲染的终端区域（用于鼠标命中测试）
    pub viewport: Rect,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        let host = HostDocument::new();
        host.focus_element(FocusPanel::Trigger.element_id());
        let controller = ModalController::new(Rc::clone(&host), config.modal_config());

        Self {
            should_quit: false,
            host,
            controller,
            pending: None,
            submissions: SubmissionsState::new(),
            status_message: None,
            config,
            viewport: Rect::default(),
        }
    }

    /// 宿主页面当前焦点（弹窗打开时为 None）
    pub fn focus(&self) -> Option<FocusPanel> {
        self.host
            .active_element()
            .as_deref()
            .and_then(FocusPanel::from_element_id)
    }

    /// 设置宿主页面焦点
    pub fn set_focus(&mut self, panel: FocusPanel) {
        self.host.focus_element(panel.element_id());
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
