//! 表单页更新逻辑

use crate::i18n::t;
use crate::message::{Command, FormMessage};
use crate::model::{App, FieldKind, Page};

/// 处理表单页消息
pub fn update(app: &mut App, msg: FormMessage) {
    match app.current_page {
        Page::UrlGrpForm => update_url_grp_form(app, msg),
        Page::UrlForm => update_url_form(app, msg),
        _ => {}
    }
}

fn update_url_grp_form(app: &mut App, msg: FormMessage) {
    let form = &mut app.url_grp_form;
    match msg {
        FormMessage::NextField => form.next_field(),
        FormMessage::PrevField => form.prev_field(),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Input(ch) => {
            if form.focused_field() == FieldKind::Enabled {
                if ch == ' ' {
                    form.toggle_enabled();
                }
            } else {
                form.input(ch);
            }
        }
        FormMessage::CycleOption { .. } => {
            if form.focused_field() == FieldKind::Enabled {
                form.toggle_enabled();
            }
        }
        FormMessage::Submit => match form.controller.begin_submit() {
            Ok(submission) => {
                app.set_status(t().form.submitting);
                app.dispatch(Command::SubmitUrlGrp(submission));
            }
            Err(e) => log::debug!("group form not submitted: {e}"),
        },
    }
}

fn update_url_form(app: &mut App, msg: FormMessage) {
    let form = &mut app.url_form;
    match msg {
        FormMessage::NextField => form.next_field(),
        FormMessage::PrevField => form.prev_field(),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Input(ch) => match form.focused_field() {
            FieldKind::Enabled if ch == ' ' => form.toggle_enabled(),
            FieldKind::Enabled | FieldKind::Group => {}
            FieldKind::Name | FieldKind::Link => form.input(ch),
        },
        FormMessage::CycleOption { backwards } => match form.focused_field() {
            FieldKind::Group => {
                let next = app
                    .group_options
                    .cycle(form.controller.value().id_url_grp, backwards);
                form.controller.update_field(|url| url.id_url_grp = next);
            }
            FieldKind::Enabled => form.toggle_enabled(),
            FieldKind::Name | FieldKind::Link => {}
        },
        FormMessage::Submit => match form.controller.begin_submit() {
            Ok(submission) => {
                app.set_status(t().form.submitting);
                app.dispatch(Command::SubmitUrl(submission));
            }
            Err(e) => log::debug!("url form not submitted: {e}"),
        },
    }
}
