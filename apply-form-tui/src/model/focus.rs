//! 宿主页面焦点

/// 宿主页面上可聚焦的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 打开表单的触发按钮
    #[default]
    Trigger,
    /// 已收到的申请列表
    Submissions,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Trigger => FocusPanel::Submissions,
            FocusPanel::Submissions => FocusPanel::Trigger,
        }
    }

    /// 在宿主文档中的元素 ID
    pub fn element_id(self) -> &'static str {
        match self {
            FocusPanel::Trigger => "trigger-button",
            FocusPanel::Submissions => "submission-list",
        }
    }

    /// 从宿主文档的元素 ID 解析
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "trigger-button" => Some(FocusPanel::Trigger),
            "submission-list" => Some(FocusPanel::Submissions),
            _ => None,
        }
    }

    pub fn is_trigger(self) -> bool {
        matches!(self, FocusPanel::Trigger)
    }

    pub fn is_submissions(self) -> bool {
        matches!(self, FocusPanel::Submissions)
    }
}
