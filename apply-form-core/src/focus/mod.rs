//! 焦点管理
//!
//! - `FocusRegistry`：由表单视图维护的有序可聚焦元素注册表
//! - `FocusTrap`：弹窗打开期间把 Tab 导航限制在注册表内

mod registry;
mod trap;

pub use registry::{FocusId, FocusRegistry};
pub use trap::{FocusTrap, TrapKey, TrapOutcome};
