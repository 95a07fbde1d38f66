//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     host: HostDocument { 焦点 = "trigger-button" }, // 宿主页面，焦点在触发按钮上
//!     controller: ModalController { state: Closed },  // 弹窗控制器
//!     pending: None,                                  // 尚无等待中的弹窗结果
//!     submissions: [],                                // 已收到的申请
//!     status_message: None,                           // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI，同时记录终端区域
//!     app.controller.after_render()                   // 渲染之后才把焦点移到弹窗标题
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//!     update::update(&mut app, AppMessage::Tick)      // 推进延迟关闭并收取弹窗结果
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::render(app, frame);
        })?;

        // 2. 执行渲染后才能进行的焦点移动
        app.controller.after_render();

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }

        // 7. 推进时钟
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
