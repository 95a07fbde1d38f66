//! 无障碍播报区域
//!
//! 始终存在但视觉上隐藏的区域，辅助技术以 polite 方式整体朗读其内容。
//! 每次播报都替换（而非追加）文本。

use crate::validation::FieldErrors;

/// 播报礼貌级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    /// 等待当前朗读结束，不打断
    #[default]
    Polite,
    /// 立即打断
    Assertive,
}

/// 实时播报区域
#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    text: String,
    politeness: Politeness,
    /// 每次变化是否整体朗读
    atomic: bool,
    /// 播报次数，视图据此判断内容是否更新
    revision: u64,
}

impl LiveRegion {
    /// polite + atomic
    pub fn polite() -> Self {
        Self {
            politeness: Politeness::Polite,
            atomic: true,
            ..Self::default()
        }
    }

    /// 替换播报内容
    pub fn announce(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision += 1;
        log::debug!("Live region: {}", self.text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// 组装校验失败时的播报文本：前缀 + 按字段顺序以逗号连接的错误信息
pub fn error_announcement(prefix: &str, errors: &FieldErrors) -> String {
    format!("{prefix}{}", errors.messages().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    #[test]
    fn announce_replaces_text() {
        let mut region = LiveRegion::polite();
        region.announce("first");
        region.announce("second");
        assert_eq!(region.text(), "second");
        assert_eq!(region.revision(), 2);
        assert_eq!(region.politeness(), Politeness::Polite);
        assert!(region.is_atomic());
    }

    #[test]
    fn error_announcement_joins_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Experience, "pick one");
        errors.insert(Field::Name, "name please");
        assert_eq!(
            error_announcement("input errors exist. ", &errors),
            "input errors exist. name please, pick one"
        );
    }
}
