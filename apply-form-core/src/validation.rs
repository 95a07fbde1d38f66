//! 表单校验
//!
//! 纯函数：`FormData` → 字段级错误信息。每次调用都会检查全部字段，
//! 字段之间互不短路。

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Field, FormData};

/// 最短姓名长度（按字符计）
const MIN_NAME_CHARS: usize = 2;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static GITHUB_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_-]+/?$").ok()
});

/// 校验错误信息
pub mod messages {
    pub const NAME_REQUIRED: &str = "Please enter your name.";
    pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
    pub const EMAIL_REQUIRED: &str = "Please enter your email.";
    pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
    pub const EXPERIENCE_REQUIRED: &str = "Please select your years of experience.";
    pub const GITHUB_INVALID: &str =
        "Please enter a valid GitHub link (e.g. https://github.com/username).";
}

/// 字段级错误
///
/// 只有无效字段才有对应的键；迭代顺序即字段声明顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// 清除单个字段的错误，返回是否存在过
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 第一个出错的字段（按声明顺序）
    pub fn first_invalid(&self) -> Option<Field> {
        self.entries.keys().next().copied()
    }

    /// 所有错误信息（按声明顺序）
    pub fn messages(&self) -> Vec<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// 校验表单数据
pub fn validate(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = data.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, messages::NAME_REQUIRED);
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.insert(Field::Name, messages::NAME_TOO_SHORT);
    }

    // 格式检查使用原始值，只有判空时才 trim
    if data.email.trim().is_empty() {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    } else if !matches(&EMAIL_PATTERN, &data.email) {
        errors.insert(Field::Email, messages::EMAIL_INVALID);
    }

    if data.experience.is_empty() {
        errors.insert(Field::Experience, messages::EXPERIENCE_REQUIRED);
    }

    if !data.github.trim().is_empty() && !matches(&GITHUB_PATTERN, &data.github) {
        errors.insert(Field::Github, messages::GITHUB_INVALID);
    }

    errors
}

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            experience: "1".to_string(),
            github: String::new(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn empty_name_is_independent_of_other_fields() {
        let data = FormData {
            name: String::new(),
            ..valid_form()
        };
        let errors = validate(&data);
        assert_eq!(errors.get(Field::Name), Some(messages::NAME_REQUIRED));
        assert_eq!(errors.len(), 1);

        // 其他字段同时无效时，name 的错误不受影响
        let errors = validate(&FormData::default());
        assert_eq!(errors.get(Field::Name), Some(messages::NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Experience), Some(messages::EXPERIENCE_REQUIRED));
        assert!(!errors.contains(Field::Github));
    }

    #[test]
    fn whitespace_name_is_required_error() {
        let data = FormData {
            name: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&data).get(Field::Name), Some(messages::NAME_REQUIRED));
    }

    #[test]
    fn one_char_name_is_too_short() {
        let data = FormData {
            name: "A".to_string(),
            ..valid_form()
        };
        let errors = validate(&data);
        assert_eq!(errors.get(Field::Name), Some(messages::NAME_TOO_SHORT));
        assert_eq!(errors.len(), 1);

        // trim 后才计算长度
        let data = FormData {
            name: " A ".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&data).get(Field::Name), Some(messages::NAME_TOO_SHORT));
    }

    #[test]
    fn name_length_counts_characters() {
        let data = FormData {
            name: "김철".to_string(),
            ..valid_form()
        };
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn email_format() {
        for bad in ["plain", "a@b", "a b@c.d", "@b.co", "a@@b.co", " a@b.co"] {
            let data = FormData {
                email: bad.to_string(),
                ..valid_form()
            };
            assert_eq!(
                validate(&data).get(Field::Email),
                Some(messages::EMAIL_INVALID),
                "{bad} should be rejected"
            );
        }

        for good in ["a@b.co", "first.last@sub.example.org"] {
            let data = FormData {
                email: good.to_string(),
                ..valid_form()
            };
            assert!(validate(&data).is_empty(), "{good} should be accepted");
        }
    }

    #[test]
    fn experience_required() {
        let data = FormData {
            experience: String::new(),
            ..valid_form()
        };
        let errors = validate(&data);
        assert_eq!(errors.get(Field::Experience), Some(messages::EXPERIENCE_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn github_is_optional_but_checked() {
        let ok = [
            "https://github.com/foo",
            "http://github.com/foo",
            "https://www.github.com/foo-bar_1/",
            "   ",
        ];
        for value in ok {
            let data = FormData {
                github: value.to_string(),
                ..valid_form()
            };
            assert!(validate(&data).is_empty(), "{value:?} should be accepted");
        }

        let bad = [
            "github.com/foo",
            "https://github.com/",
            "https://github.com/foo/bar",
            "https://gitlab.com/foo",
            "ftp://github.com/foo",
        ];
        for value in bad {
            let data = FormData {
                github: value.to_string(),
                ..valid_form()
            };
            assert_eq!(
                validate(&data).get(Field::Github),
                Some(messages::GITHUB_INVALID),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn first_invalid_follows_declaration_order() {
        let data = FormData {
            name: "Al".to_string(),
            email: "nope".to_string(),
            experience: String::new(),
            github: "x".to_string(),
        };
        let errors = validate(&data);
        assert_eq!(errors.first_invalid(), Some(Field::Email));
        assert_eq!(
            errors.messages(),
            vec![
                messages::EMAIL_INVALID,
                messages::EXPERIENCE_REQUIRED,
                messages::GITHUB_INVALID
            ]
        );
    }

    #[test]
    fn clear_field_reports_presence() {
        let mut errors = validate(&FormData::default());
        assert!(errors.clear_field(Field::Name));
        assert!(!errors.clear_field(Field::Name));
        assert_eq!(errors.first_invalid(), Some(Field::Email));
    }
}
