//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的服务
//!
//! 目前只有配置服务：
//!     - ConfigService trait：加载 / 保存配置
//!     - LocalConfigService：`<config_dir>/apply-form/config.json`
//!
//! 表单数据本身不落盘，提交结果只交给调用方（申请列表）。
//!

mod config_service;

pub use config_service::{app_dir, AppConfig, ConfigService, LocalConfigService};
