//! 弹窗消息类型

use apply_form_core::{ClickTarget, FocusId};

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Tab：焦点前进（末尾回绕）
    NextFocus,

    /// Shift+Tab：焦点后退（开头回绕）
    PrevFocus,

    /// Esc：经焦点陷阱取消
    Escape,

    /// 直接取消（取消按钮、Ctrl+C）
    Cancel,

    /// 提交表单
    Submit,

    /// 鼠标点击（遮罩或对话框）
    Click(ClickTarget),

    /// 点击对话框内的某个元素
    FocusOn(FocusId),

    /// 在当前文本字段输入字符
    Input(char),

    /// 删除当前文本字段末尾的字符
    Backspace,

    /// 经验年限：上一个选项
    PrevOption,

    /// 经验年限：下一个选项
    NextOption,
}
