//! 表单数据

use serde::{Deserialize, Serialize};

use super::Field;

/// 申请表单数据
///
/// 会话期间由控制器独占，每次关闭（成功或取消）后重置为空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    /// 经验年限的枚举代码（见 `EXPERIENCE_OPTIONS`），空串表示未选择
    pub experience: String,
    /// 可选
    pub github: String,
}

impl FormData {
    /// 读取字段值
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Experience => &self.experience,
            Field::Github => &self.github,
        }
    }

    /// 字段值的可变引用
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Experience => &mut self.experience,
            Field::Github => &mut self.github,
        }
    }

    /// 替换字段值
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// 所有字段是否都为空
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}
