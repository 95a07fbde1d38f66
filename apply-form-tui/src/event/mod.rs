//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ Tick      │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 读取配置          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   apply-form-     │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，只处理 Press
//!             Event::Mouse(MouseEvent)            // 鼠标事件：弹窗打开时用于命中测试
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，重绘终端
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理，宿主快捷键全部失效
//!                 - 否则处理宿主页面按键（退出、切换焦点、打开表单、滚动列表）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Esc         → ModalMessage::Escape        经焦点陷阱取消
//!         Ctrl+C      → ModalMessage::Cancel
//!         Tab         → ModalMessage::NextFocus     末尾回绕到开头
//!         Shift+Tab   → ModalMessage::PrevFocus     开头回绕到末尾
//!         Enter       → 焦点在字段上时提交；在按钮上时激活该按钮
//!         Space       → 激活按钮；在经验年限上切换选项
//!         ←/→         → ModalMessage::PrevOption / NextOption（经验年限）
//!         字符输入     → ModalMessage::Input(c)（文本字段）
//!         Backspace   → ModalMessage::Backspace
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗鼠标处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     使用 view 层的 DialogLayout 计算对话框位置（与渲染同一份坐标）：
//!         对话框之外    → Click(ClickTarget::Overlay)   取消
//!         字段 / 标题   → FocusOn(id)
//!         按钮          → Cancel / Submit（禁用时忽略）
//!         其余对话框内  → Click(ClickTarget::Dialog)    不关闭
//!
//!
//! 即，handler.rs 使用 message 层定义的 AppMessage 枚举类型，
//! 创建一个对应的枚举值并返回，随后由 src/app.rs 交给 update::update()。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
