//! 可聚焦元素注册表

use crate::types::Field;

/// 弹窗内的可聚焦元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusId {
    /// 弹窗标题（只能以编程方式聚焦，不参与 Tab 顺序）
    Heading,
    /// 表单字段
    Field(Field),
    /// 取消按钮
    CancelButton,
    /// 提交按钮
    SubmitButton,
}

impl FocusId {
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn is_button(self) -> bool {
        matches!(self, Self::CancelButton | Self::SubmitButton)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: FocusId,
    /// 是否参与 Tab 顺序
    tabbable: bool,
    disabled: bool,
}

/// 可聚焦元素注册表
///
/// 注册顺序即文档顺序。
#[derive(Debug, Default)]
pub struct FocusRegistry {
    entries: Vec<Entry>,
    active: Option<FocusId>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册元素；重复注册会更新原位置上的属性
    pub fn register(&mut self, id: FocusId, tabbable: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.tabbable = tabbable;
        } else {
            self.entries.push(Entry {
                id,
                tabbable,
                disabled: false,
            });
        }
    }

    /// 清空注册表（视图卸载）
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
    }

    pub fn is_registered(&self, id: FocusId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// 启用/禁用元素；禁用当前焦点元素时焦点丢失
    pub fn set_disabled(&mut self, id: FocusId, disabled: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.disabled = disabled;
        }
        if disabled && self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn is_disabled(&self, id: FocusId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.disabled)
    }

    /// 当前可通过 Tab 到达的元素（文档顺序，排除禁用项）
    ///
    /// 每次按 Tab 时重新计算。
    pub fn focusable_set(&self) -> Vec<FocusId> {
        self.entries
            .iter()
            .filter(|entry| entry.tabbable && !entry.disabled)
            .map(|entry| entry.id)
            .collect()
    }

    /// 移动焦点；目标未注册或已禁用时不做任何事并返回 false
    pub fn focus(&mut self, id: FocusId) -> bool {
        let focusable = self
            .entries
            .iter()
            .any(|entry| entry.id == id && !entry.disabled);
        if focusable {
            self.active = Some(id);
        } else {
            log::debug!("Focus target {id:?} is not available");
        }
        focusable
    }

    pub fn blur(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<FocusId> {
        self.active
    }
}
