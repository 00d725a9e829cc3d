//! 弹窗更新逻辑

use crate::message::{Command, ModalMessage};
use crate::model::{App, DeleteTarget, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),

        ModalMessage::ToggleDeleteFocus => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = app.modal.active.as_mut() {
                *focus = 1 - *focus;
            }
        }

        ModalMessage::Confirm => {
            let Some(modal) = app.modal.active.take() else {
                return;
            };
            if let Modal::ConfirmDelete {
                target, focus: 1, ..
            } = modal
            {
                start_delete(app, target);
            }
        }
    }
}

fn start_delete(app: &mut App, target: DeleteTarget) {
    match target {
        DeleteTarget::UrlGrp { id } => {
            let token = app.url_grps.begin_delete();
            app.dispatch(Command::DeleteUrlGrp { token, id });
        }
        DeleteTarget::Url { id } => {
            let token = app.urls.begin_delete();
            app.dispatch(Command::DeleteUrl { token, id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AppMessage;
    use crate::update::test_support::{app, run};

    fn confirm_dialog(app: &mut App) {
        app.modal
            .show_confirm_delete(DeleteTarget::Url { id: 8 }, "GitHub");
    }

    #[test]
    fn cancel_is_default_choice() {
        let mut app = app();
        confirm_dialog(&mut app);
        let commands = run(&mut app, [AppMessage::Modal(ModalMessage::Confirm)]);
        assert!(commands.is_empty());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn confirming_delete_dispatches_request() {
        let mut app = app();
        confirm_dialog(&mut app);
        let commands = run(
            &mut app,
            [
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus),
                AppMessage::Modal(ModalMessage::Confirm),
            ],
        );
        assert!(matches!(
            commands.as_slice(),
            [Command::DeleteUrl { id: 8, .. }]
        ));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn help_closes_on_confirm() {
        let mut app = app();
        app.modal.show_help();
        run(&mut app, [AppMessage::Modal(ModalMessage::Confirm)]);
        assert!(!app.modal.is_open());
    }
}
