//! 列表页更新逻辑

use portfolio_admin_core::types::{Url, UrlGrp, project_label};

use crate::message::ContentMessage;
use crate::model::{App, DeleteTarget, FocusPanel, FormState, Page};

use super::navigate;

/// 处理列表页消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => select(app, Move::Previous),
        ContentMessage::SelectNext => select(app, Move::Next),
        ContentMessage::SelectFirst => select(app, Move::First),
        ContentMessage::SelectLast => select(app, Move::Last),

        // Enter 打开选中项的编辑页
        ContentMessage::Confirm | ContentMessage::Edit => open_edit(app),

        ContentMessage::Add => match app.current_page {
            Page::UrlGrps => open_url_grp_form(app, None),
            Page::Urls => open_url_form(app, None),
            _ => {}
        },

        ContentMessage::Delete => confirm_delete(app),

        ContentMessage::CycleFilter => {
            if app.current_page == Page::Urls {
                app.urls.cycle_filter();
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Move {
    Previous,
    Next,
    First,
    Last,
}

fn select(app: &mut App, direction: Move) {
    macro_rules! apply {
        ($list:expr) => {
            match direction {
                Move::Previous => $list.select_previous(),
                Move::Next => $list.select_next(),
                Move::First => $list.select_first(),
                Move::Last => $list.select_last(),
            }
        };
    }

    match app.current_page {
        Page::UrlGrps => apply!(app.url_grps),
        Page::Urls => apply!(app.urls),
        Page::Projects => apply!(app.projects),
        _ => {}
    }
}

fn open_edit(app: &mut App) {
    match app.current_page {
        Page::UrlGrps => {
            if let Some(group) = app.url_grps.selected_item().cloned() {
                open_url_grp_form(app, Some(group));
            }
        }
        Page::Urls => {
            if let Some(row) = app.urls.selected_row() {
                open_url_form(app, Some(row.to_url()));
            }
        }
        Page::Projects => {
            if let Some(project) = app.projects.selected_item() {
                let label = project_label(project);
                app.set_status(label);
            }
        }
        _ => {}
    }
}

fn open_url_grp_form(app: &mut App, group: Option<UrlGrp>) {
    app.url_grp_form = FormState::new(group);
    navigate(app, Page::UrlGrpForm);
    app.focus = FocusPanel::Content;
}

fn open_url_form(app: &mut App, url: Option<Url>) {
    app.url_form = FormState::new(url);
    navigate(app, Page::UrlForm);
    app.focus = FocusPanel::Content;
}

fn confirm_delete(app: &mut App) {
    match app.current_page {
        Page::UrlGrps => {
            if let Some(group) = app.url_grps.selected_item() {
                let target = DeleteTarget::UrlGrp { id: group.id };
                let name = group.name.clone();
                app.modal.show_confirm_delete(target, &name);
            }
        }
        Page::Urls => {
            if let Some(row) = app.urls.selected_row() {
                app.modal
                    .show_confirm_delete(DeleteTarget::Url { id: row.id }, &row.name);
            }
        }
        _ => {}
    }
}
