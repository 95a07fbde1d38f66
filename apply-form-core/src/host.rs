//! 宿主页面状态
//!
//! 弹窗打开期间需要修改的进程级共享状态：
//! - 滚动锁（背景页面不可滚动）
//! - 文档级按键监听（焦点陷阱）
//! - 宿主侧的当前焦点元素（用于关闭后归还焦点）
//!
//! 滚动锁与按键监听都以 RAII 守卫的形式获取，守卫 drop 时释放，
//! 因此任何退出路径（成功关闭、取消、强制卸载）都会恢复宿主状态。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// 宿主文档
#[derive(Debug, Default)]
pub struct HostDocument {
    scroll_locks: Cell<u32>,
    key_listeners: Cell<u32>,
    active_element: RefCell<Option<String>>,
}

impl HostDocument {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// 背景滚动是否被挂起
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks.get() > 0
    }

    /// 当前已安装的按键监听数量
    pub fn key_listener_count(&self) -> u32 {
        self.key_listeners.get()
    }

    /// 宿主侧当前获得焦点的元素
    pub fn active_element(&self) -> Option<String> {
        self.active_element.borrow().clone()
    }

    /// 将焦点移到宿主元素
    pub fn focus_element(&self, id: impl Into<String>) {
        *self.active_element.borrow_mut() = Some(id.into());
    }

    /// 宿主侧失去焦点（焦点进入弹窗）
    pub fn blur(&self) {
        *self.active_element.borrow_mut() = None;
    }
}

/// 滚动锁守卫
#[derive(Debug)]
pub struct ScrollLock {
    doc: Rc<HostDocument>,
}

impl ScrollLock {
    pub fn acquire(doc: &Rc<HostDocument>) -> Self {
        doc.scroll_locks.set(doc.scroll_locks.get() + 1);
        log::debug!("Scroll lock acquired");
        Self {
            doc: Rc::clone(doc),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.doc
            .scroll_locks
            .set(self.doc.scroll_locks.get().saturating_sub(1));
        log::debug!("Scroll lock released");
    }
}

/// 文档级按键监听注册
#[derive(Debug)]
pub struct KeyListener {
    doc: Rc<HostDocument>,
}

impl KeyListener {
    pub fn install(doc: &Rc<HostDocument>) -> Self {
        doc.key_listeners.set(doc.key_listeners.get() + 1);
        Self {
            doc: Rc::clone(doc),
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.doc
            .key_listeners
            .set(self.doc.key_listeners.get().saturating_sub(1));
    }
}
