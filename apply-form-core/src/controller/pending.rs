//! 待定结果
//!
//! `open()` 返回的一次性结果句柄：提交成功得到 `Some(FormData)`，取消得到 `None`。

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::error::{ModalError, ModalResult};
use crate::types::FormData;

/// 会话的结果发送端，只能使用一次
#[derive(Debug)]
pub(crate) struct Resolver {
    tx: Option<oneshot::Sender<Option<FormData>>>,
}

impl Resolver {
    /// 投递结果；已投递过时返回 false
    pub(crate) fn settle(&mut self, result: Option<FormData>) -> bool {
        let Some(tx) = self.tx.take() else {
            return false;
        };
        if tx.send(result).is_err() {
            // 调用方已丢弃句柄，结果无人接收
            log::debug!("Form result receiver dropped before settlement");
        }
        true
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.tx.is_none()
    }
}

/// 可等待的弹窗结果
#[derive(Debug)]
pub struct PendingResult {
    rx: oneshot::Receiver<Option<FormData>>,
}

pub(crate) fn channel() -> (Resolver, PendingResult) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx: Some(tx) }, PendingResult { rx })
}

impl PendingResult {
    /// 非阻塞地取出结果（供事件循环轮询）
    ///
    /// 尚未结算时返回 `None`。取到结果后应丢弃该句柄。
    pub fn try_take(&mut self) -> Option<ModalResult<Option<FormData>>> {
        match self.rx.try_recv() {
            Ok(result) => Some(Ok(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(ModalError::Abandoned)),
        }
    }
}

impl Future for PendingResult {
    type Output = ModalResult<Option<FormData>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.map_err(|_| ModalError::Abandoned))
    }
}
