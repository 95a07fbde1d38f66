//! Apply Form TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 弹窗的生命周期、校验、焦点陷阱与播报都在 `apply-form-core` 中，
//! 本 crate 只负责把终端事件翻译给它，并把它的状态画出来。
//!
//!
//! main.rs
//! Apply Form TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     ConfigService::load()   // 读取配置，失败时使用默认值
//!     init_logging()          // 文件日志（终端被 TUI 占用）
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     teardown()              // 弹窗仍打开时强制卸载
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout, EnterAlternateScreen, EnableMouseCapture)?
//!             - 切换到 备用屏幕，并接收鼠标点击
//!         · 返回 Terminal 对象
//!
//!
//!     App::new()              // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细说）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
mod message;
mod model;
mod texts;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{app_dir, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(err) => (backend::AppConfig::default(), Some(err)),
    };

    // 2. 初始化日志
    init_logging(&app_dir())?;
    if let Some(err) = config_error {
        log::warn!("Falling back to default config: {err:#}");
    } else if !config_service.path().exists() {
        // 首次运行时写出默认配置，便于用户修改
        if let Err(err) = config_service.save(&config) {
            log::warn!("Failed to write default config: {err:#}");
        }
    }
    view::theme::set_theme(config.theme);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(config);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 强制卸载仍打开的弹窗
    app.controller.teardown();

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref err) = result {
        log::error!("Application exited with error: {err:#}");
    }

    // 8. 返回结果
    result
}
