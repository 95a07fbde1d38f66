//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 宿主页面焦点（Trigger / Submissions）
//!
//!         pub mod state;      // 页面数据状态（申请列表）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub host: Rc<HostDocument>,             // 宿主文档
//!             pub controller: ModalController,        // 弹窗控制器（来自 apply-form-core）
//!             pub pending: Option<PendingResult>,     // 等待中的弹窗结果
//!             pub submissions: SubmissionsState,      // 已收到的申请
//!             pub status_message: Option<String>,     // 状态栏消息
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点（FocusPanel 与弹窗焦点）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     焦点分为两侧：
//!         - 宿主侧：HostDocument 记录当前元素 ID，App::focus() 解析为 FocusPanel
//!         - 弹窗侧：ModalController 内部的 FocusRegistry
//!
//!     弹窗打开时宿主侧失去焦点；关闭时控制器把焦点归还给打开前的元素
//!     （通常是触发按钮）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗结果
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     打开弹窗时 App 保存 controller.open() 返回的 PendingResult，
//!     主循环每轮非阻塞地检查它：
//!         - Some(FormData)    → 追加到申请列表
//!         - None              → 显示 “已取消”
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::SubmissionsState;
