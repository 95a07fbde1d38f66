//! 表单字段与经验年限选项

use serde::{Deserialize, Serialize};

/// 表单字段
///
/// 声明顺序即校验结果、错误播报与焦点回退的顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// 姓名 / 昵称
    Name,
    /// 邮箱
    Email,
    /// FE 经验年限（枚举选择）
    Experience,
    /// GitHub 链接（可选）
    Github,
}

impl Field {
    /// 全部字段（按声明顺序）
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Experience, Field::Github];

    /// 字段键名
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Experience => "experience",
            Self::Github => "github",
        }
    }

    /// 从键名解析
    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// 是否为必填字段
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Github)
    }

    /// 是否为自由文本输入（经验年限是下拉选择）
    pub fn is_text_input(self) -> bool {
        !matches!(self, Self::Experience)
    }
}

/// 经验年限选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceOption {
    /// 提交值
    pub value: &'static str,
    /// 显示标签
    pub label: &'static str,
}

/// 固定的经验年限选项集合
pub const EXPERIENCE_OPTIONS: [ExperienceOption; 3] = [
    ExperienceOption {
        value: "0",
        label: "0-3 years",
    },
    ExperienceOption {
        value: "1",
        label: "4-7 years",
    },
    ExperienceOption {
        value: "2+",
        label: "8+ years",
    },
];

/// 根据提交值查找显示标签
pub fn experience_label(value: &str) -> Option<&'static str> {
    EXPERIENCE_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

impl ExperienceOption {
    /// 在 "未选择" + 选项之间循环切换，返回新的提交值
    ///
    /// 空字符串表示占位项（未选择）。
    pub fn cycle(current: &str, forward: bool) -> &'static str {
        let values: Vec<&'static str> = std::iter::once("")
            .chain(EXPERIENCE_OPTIONS.iter().map(|option| option.value))
            .collect();
        let index = values.iter().position(|v| *v == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % values.len()
        } else if index == 0 {
            values.len() - 1
        } else {
            index - 1
        };
        values[next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_ordered_by_declaration() {
        let mut shuffled = vec![Field::Github, Field::Name, Field::Experience, Field::Email];
        shuffled.sort();
        assert_eq!(shuffled, Field::ALL.to_vec());
    }

    #[test]
    fn from_key_round_trips() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("phone"), None);
    }

    #[test]
    fn cycle_wraps_through_placeholder() {
        assert_eq!(ExperienceOption::cycle("", true), "0");
        assert_eq!(ExperienceOption::cycle("2+", true), "");
        assert_eq!(ExperienceOption::cycle("", false), "2+");
        assert_eq!(ExperienceOption::cycle("1", false), "0");
        // 未知值按占位项处理
        assert_eq!(ExperienceOption::cycle("9", true), "0");
    }

    #[test]
    fn experience_label_lookup() {
        assert_eq!(experience_label("2+"), Some("8+ years"));
        assert_eq!(experience_label(""), None);
    }
}
