//! 焦点陷阱

use std::rc::Rc;

use super::{FocusId, FocusRegistry};
use crate::host::{HostDocument, KeyListener};

/// 焦点陷阱关心的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKey {
    /// Tab（正向）
    Tab,
    /// Shift+Tab（反向）
    BackTab,
    /// Esc
    Escape,
}

/// 按键处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// 请求取消弹窗（Esc）
    Cancel,
    /// 在边界处回绕（阻止了默认的 Tab 行为）
    Wrapped(FocusId),
    /// 在弹窗内正常前进/后退
    Moved(FocusId),
    /// 陷阱未激活或弹窗内没有可聚焦元素
    Ignored,
}

/// 焦点陷阱
///
/// 激活期间持有文档级按键监听；停用时监听随之移除。
#[derive(Debug, Default)]
pub struct FocusTrap {
    listener: Option<KeyListener>,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 激活；已激活时不会重复注册监听
    pub fn activate(&mut self, doc: &Rc<HostDocument>) {
        if self.listener.is_none() {
            self.listener = Some(KeyListener::install(doc));
        }
    }

    pub fn deactivate(&mut self) {
        self.listener = None;
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// 处理按键
    ///
    /// Esc 无论焦点在哪里都返回 `Cancel`，由调用方执行取消。
    pub fn handle_key(&self, key: TrapKey, registry: &mut FocusRegistry) -> TrapOutcome {
        if !self.is_active() {
            return TrapOutcome::Ignored;
        }

        if key == TrapKey::Escape {
            return TrapOutcome::Cancel;
        }

        let focusable = registry.focusable_set();
        let (Some(&first), Some(&last)) = (focusable.first(), focusable.last()) else {
            return TrapOutcome::Ignored;
        };

        let position = registry
            .active()
            .and_then(|active| focusable.iter().position(|id| *id == active));

        let outcome = match (key, position) {
            (TrapKey::Tab, Some(index)) if index + 1 == focusable.len() => {
                TrapOutcome::Wrapped(first)
            }
            (TrapKey::Tab, Some(index)) => TrapOutcome::Moved(focusable[index + 1]),
            (TrapKey::BackTab, Some(0)) => TrapOutcome::Wrapped(last),
            (TrapKey::BackTab, Some(index)) => TrapOutcome::Moved(focusable[index - 1]),
            // 焦点在集合之外（例如标题）
            (TrapKey::Tab, None) => TrapOutcome::Moved(first),
            (TrapKey::BackTab, None) => TrapOutcome::Moved(last),
            (TrapKey::Escape, _) => TrapOutcome::Cancel,
        };

        if let TrapOutcome::Wrapped(id) | TrapOutcome::Moved(id) = outcome {
            registry.focus(id);
        }
        outcome
    }
}
