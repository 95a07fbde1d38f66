//! 弹窗配置

use std::time::Duration;

/// 成功提交后到自动关闭之间的默认延迟
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(1000);

/// 弹窗控制器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
    /// 成功提交后延迟关闭的时长
    pub close_delay: Duration,
    /// 校验失败播报的前缀
    pub error_prefix: String,
    /// 提交成功的播报
    pub success_message: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_delay: DEFAULT_CLOSE_DELAY,
            error_prefix: "input errors exist. ".to_string(),
            success_message: "Your application was submitted successfully.".to_string(),
        }
    }
}

impl ModalConfig {
    #[must_use]
    pub fn with_close_delay(mut self, close_delay: Duration) -> Self {
        self.close_delay = close_delay;
        self
    }
}
