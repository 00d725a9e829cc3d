//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层是唯一修改 Model 的地方。它本身不做 I/O：
//! 需要访问 API 时调用 `app.dispatch(Command)`，结果以
//! `AppMessage::Task` 的形式回到这里。
//!
//!     src/update/mod.rs
//!         mod content;        // 列表页：选择、新建、编辑、删除、过滤
//!         mod form;           // 表单页：字段编辑、提交
//!         mod modal;          // 删除确认、帮助
//!         mod navigation;     // 导航栏
//!         mod task;           // 后台任务结果
//!
//!     页面切换统一走 navigate()：
//!
//!         navigate(app, page)
//!             ├─ leave_page(旧页面)    // 旧页面的控制器 leave()，未完成的请求作废
//!             ├─ current_page = page
//!             └─ load_page(page)       // begin_load() + dispatch(Load*)

mod content;
mod form;
mod modal;
mod navigation;
mod task;

use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::{App, NavItemId, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Task(result) => task::update(app, result),

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if let Some(parent) = app.current_page.parent() {
                navigate(app, parent);
            }
        }

        AppMessage::Refresh => match app.current_page {
            // 没有可重新加载的数据
            Page::Home | Page::UrlGrpForm => {}
            Page::UrlForm => {
                app.set_status(t().common.loading);
                load_group_options(app);
            }
            page => {
                app.set_status(t().common.loading);
                load_page(app, page);
            }
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::DismissNotification => {
            app.notifications.close();
        }

        AppMessage::Noop => {}
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::UrlGrps => Page::UrlGrps,
        NavItemId::Urls => Page::Urls,
        NavItemId::Projects => Page::Projects,
    }
}

/// 切换页面：旧页面的请求作废，新页面开始加载
pub(crate) fn navigate(app: &mut App, page: Page) {
    leave_page(app, app.current_page);
    log::debug!("navigate {:?} -> {page:?}", app.current_page);
    app.current_page = page;
    app.navigation.select_id(page.nav_id());
    app.clear_status();
    load_page(app, page);
}

fn leave_page(app: &mut App, page: Page) {
    match page {
        Page::Home => {}
        Page::UrlGrps => app.url_grps.leave(),
        Page::UrlGrpForm => app.url_grp_form.controller.leave(),
        Page::Urls => app.urls.leave(),
        Page::UrlForm => {
            app.url_form.controller.leave();
            app.group_options.leave();
        }
        Page::Projects => app.projects.leave(),
    }
}

/// 进入页面或刷新时的加载
fn load_page(app: &mut App, page: Page) {
    match page {
        Page::Home | Page::UrlGrpForm => {}
        Page::UrlGrps => {
            let token = app.url_grps.begin_load();
            app.dispatch(Command::LoadUrlGrps(token));
        }
        Page::Urls => {
            let token = app.urls.begin_load();
            app.dispatch(Command::LoadUrls(token));
        }
        Page::UrlForm => load_group_options(app),
        Page::Projects => {
            let token = app.projects.begin_load();
            app.dispatch(Command::LoadProjects(token));
        }
    }
}

fn load_group_options(app: &mut App) {
    let token = app.group_options.begin_load();
    app.dispatch(Command::LoadGroupOptions(token));
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, run};
    use super::*;
    use crate::message::NavigationMessage;
    use crate::model::FocusPanel;

    #[test]
    fn entering_groups_page_starts_load() {
        let mut app = app();
        let commands = run(
            &mut app,
            [
                AppMessage::Navigation(NavigationMessage::SelectNext),
                AppMessage::Navigation(NavigationMessage::Confirm),
            ],
        );
        assert_eq!(app.current_page, Page::UrlGrps);
        assert!(app.url_grps.state().is_loading());
        assert!(matches!(commands.as_slice(), [Command::LoadUrlGrps(_)]));
    }

    #[test]
    fn leaving_page_invalidates_its_requests() {
        let mut app = app();
        navigate(&mut app, Page::UrlGrps);
        let token = app.url_grps.generation().current_token();

        navigate(&mut app, Page::Home);
        assert!(!app.url_grps.generation().is_current(token));
    }

    #[test]
    fn refresh_reloads_current_page() {
        let mut app = app();
        navigate(&mut app, Page::Projects);
        app.take_commands();

        let commands = run(&mut app, [AppMessage::Refresh]);
        assert!(matches!(commands.as_slice(), [Command::LoadProjects(_)]));
    }

    #[test]
    fn refresh_on_home_does_nothing() {
        let mut app = app();
        let commands = run(&mut app, [AppMessage::Refresh]);
        assert!(commands.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn go_back_from_form_returns_to_list() {
        let mut app = app();
        navigate(&mut app, Page::UrlForm);
        let commands = run(&mut app, [AppMessage::GoBack]);
        assert_eq!(app.current_page, Page::Urls);
        assert!(matches!(commands.as_slice(), [Command::LoadGroupOptions(_), Command::LoadUrls(_)]));
    }

    #[test]
    fn go_back_closes_modal_first() {
        let mut app = app();
        navigate(&mut app, Page::UrlGrpForm);
        app.modal.show_help();
        run(&mut app, [AppMessage::GoBack]);
        assert!(!app.modal.is_open());
        assert_eq!(app.current_page, Page::UrlGrpForm);
    }

    #[test]
    fn toggle_focus_ignored_while_modal_open() {
        let mut app = app();
        app.modal.show_help();
        run(&mut app, [AppMessage::ToggleFocus]);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn dismiss_closes_notification() {
        let mut app = app();
        app.notifications.show_error("boom");
        run(&mut app, [AppMessage::DismissNotification]);
        assert!(app.notifications.current().is_none());
    }
}
