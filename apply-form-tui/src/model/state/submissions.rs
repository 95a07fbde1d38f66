//! 已收到的申请列表状态

use apply_form_core::FormData;
use chrono::{DateTime, Local};

/// 一条已提交的申请
#[derive(Debug, Clone)]
pub struct Submission {
    pub data: FormData,
    pub received_at: DateTime<Local>,
}

/// 申请列表状态（仅内存，不持久化）
#[derive(Debug, Default)]
pub struct SubmissionsState {
    /// 申请列表（最新的在最后）
    pub items: Vec<Submission>,
    /// 当前选中的索引
    pub selected: usize,
}

impl SubmissionsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条申请并选中它
    pub fn push(&mut self, data: FormData) {
        self.items.push(Submission {
            data,
            received_at: Local::now(),
        });
        self.selected = self.items.len() - 1;
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    pub fn selected_item(&self) -> Option<&Submission> {
        self.items.get(self.selected)
    }
}
