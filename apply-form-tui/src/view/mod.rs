//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 宿主页面 + 状态栏 + 弹窗
//!         pub mod components; // 弹窗、状态栏
//!         pub mod pages;      // 宿主页面（触发按钮 + 申请列表）
//!         pub mod theme;      // 主题与样式
//!
//!
//!     渲染顺序即层叠顺序：
//!         1. 标题栏
//!         2. 宿主页面
//!         3. 状态栏
//!         4. 弹窗（遮罩使背景变暗，对话框居中）
//!
//!     弹窗的焦点在渲染之后才会移动到标题上，
//!     因此主循环在每次 draw 之后调用 `controller.after_render()`。
//!

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
