//! 申请列表更新逻辑

use crate::message::ContentMessage;
use crate::model::App;

/// 处理申请列表消息
///
/// 弹窗打开期间背景滚动被挂起，消息直接丢弃。
pub fn update(app: &mut App, msg: ContentMessage) {
    if app.host.is_scroll_locked() {
        log::debug!("Ignored {msg:?}: background scrolling is locked");
        return;
    }

    let submissions = &mut app.submissions;
    match msg {
        ContentMessage::SelectPrevious => submissions.select_previous(),
        ContentMessage::SelectNext => submissions.select_next(),
        ContentMessage::SelectFirst => submissions.select_first(),
        ContentMessage::SelectLast => submissions.select_last(),
    }
}
