//! 申请列表消息
//!
//! 宿主页面上的滚动浏览；弹窗打开时背景滚动被挂起。

/// 申请列表消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
}
