//! 应用主消息枚举

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换宿主页面焦点（触发按钮 / 申请列表）
    ToggleFocus,

    /// 打开申请表单
    OpenForm,

    /// 申请列表相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 时钟推进（驱动延迟关闭并收取弹窗结果）
    Tick,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
