//! 弹窗更新逻辑
//!
//! 把弹窗消息翻译为对 ModalController 的调用。

use apply_form_core::{SubmitOutcome, TrapKey};

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let controller = &mut app.controller;
    if !controller.is_open() {
        return;
    }

    match msg {
        ModalMessage::NextFocus => {
            controller.handle_key(TrapKey::Tab);
        }
        ModalMessage::PrevFocus => {
            controller.handle_key(TrapKey::BackTab);
        }
        ModalMessage::Escape => {
            controller.handle_key(TrapKey::Escape);
        }
        ModalMessage::Cancel => controller.cancel(),
        ModalMessage::Submit => {
            if let SubmitOutcome::Invalid { first_invalid } = controller.submit() {
                log::debug!("Submit blocked by validation, focus moved to {first_invalid:?}");
            }
        }
        ModalMessage::Click(target) => controller.click(target),
        ModalMessage::FocusOn(id) => {
            controller.focus(id);
        }
        ModalMessage::Input(ch) => {
            controller.input_char(ch);
        }
        ModalMessage::Backspace => {
            controller.backspace();
        }
        ModalMessage::PrevOption => {
            controller.cycle_option(false);
        }
        ModalMessage::NextOption => {
            controller.cycle_option(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use apply_form_core::{Field, FocusId};

    use super::*;
    use crate::backend::AppConfig;

    fn opened() -> App {
        let mut app = App::new(AppConfig::default());
        app.pending = Some(app.controller.open().unwrap());
        app.controller.after_render();
        app
    }

    #[test]
    fn input_goes_to_the_focused_text_field() {
        let mut app = opened();
        update(&mut app, ModalMessage::FocusOn(FocusId::Field(Field::Email)));
        for ch in "a@b".chars() {
            update(&mut app, ModalMessage::Input(ch));
        }
        update(&mut app, ModalMessage::Backspace);
        assert_eq!(app.controller.form().email, "a@");
        assert!(app.controller.form().name.is_empty());
    }

    #[test]
    fn input_on_heading_or_select_is_ignored() {
        let mut app = opened();
        update(&mut app, ModalMessage::Input('x'));
        update(&mut app, ModalMessage::FocusOn(FocusId::Field(Field::Experience)));
        update(&mut app, ModalMessage::Input('x'));
        assert!(app.controller.form().is_empty());
    }

    #[test]
    fn experience_cycles_through_placeholder() {
        let mut app = opened();
        update(&mut app, ModalMessage::FocusOn(FocusId::Field(Field::Experience)));

        update(&mut app, ModalMessage::PrevOption);
        assert_eq!(app.controller.form().experience, "2+");
        update(&mut app, ModalMessage::NextOption);
        assert_eq!(app.controller.form().experience, "");
        update(&mut app, ModalMessage::NextOption);
        assert_eq!(app.controller.form().experience, "0");
    }

    #[test]
    fn tab_wraps_inside_the_dialog() {
        let mut app = opened();
        update(&mut app, ModalMessage::FocusOn(FocusId::SubmitButton));
        update(&mut app, ModalMessage::NextFocus);
        assert_eq!(app.controller.focused(), Some(FocusId::Field(Field::Name)));

        update(&mut app, ModalMessage::PrevFocus);
        assert_eq!(app.controller.focused(), Some(FocusId::SubmitButton));
    }
}
