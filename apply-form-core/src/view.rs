//! 表单视图约定
//!
//! 视图按此顺序渲染元素，并在挂载时把它们登记到焦点注册表。

use crate::focus::{FocusId, FocusRegistry};
use crate::types::Field;

/// 弹窗内元素的文档顺序
pub const FORM_FOCUS_ORDER: [FocusId; 7] = [
    FocusId::Heading,
    FocusId::Field(Field::Name),
    FocusId::Field(Field::Email),
    FocusId::Field(Field::Experience),
    FocusId::Field(Field::Github),
    FocusId::CancelButton,
    FocusId::SubmitButton,
];

/// 挂载表单视图：登记全部可聚焦元素（标题只能编程聚焦）
pub fn register_focusables(registry: &mut FocusRegistry) {
    for id in FORM_FOCUS_ORDER {
        registry.register(id, id != FocusId::Heading);
    }
}
