//! 后台任务结果处理
//!
//! 每个结果都交给对应控制器的 `finish_*`，过期的 token 在那里被丢弃。

use portfolio_admin_core::controllers::{AfterSuccess, DeleteOutcome, RequestToken, SubmitOutcome};

use crate::i18n::t;
use crate::message::{Command, TaskResult};
use crate::model::{App, Page};

use super::{load_page, navigate};

/// 处理后台任务结果
pub fn update(app: &mut App, result: TaskResult) {
    match result {
        TaskResult::UrlGrpsLoaded(token, result) => {
            if app.url_grps.finish_load(token, result) {
                app.clear_status();
            }
        }

        TaskResult::UrlsLoaded(token, result) => {
            if app.urls.finish_urls(token, result) && !app.urls.state().is_loading() {
                app.clear_status();
            }
        }

        TaskResult::UrlListGroupsLoaded(token, result) => {
            if app.urls.finish_groups(token, result) && !app.urls.state().is_loading() {
                app.clear_status();
            }
        }

        TaskResult::GroupOptionsLoaded(token, result) => {
            if app.group_options.finish_load(token, result) && app.current_page == Page::UrlForm {
                app.clear_status();
            }
        }

        TaskResult::ProjectsLoaded(token, result) => {
            if app.projects.finish_load(token, result) {
                app.clear_status();
            }
        }

        TaskResult::UrlGrpDeleted(token, result) => {
            if app.url_grps.finish_delete(token, result) == DeleteOutcome::Reload {
                load_page(app, Page::UrlGrps);
            }
        }

        TaskResult::UrlDeleted(token, result) => {
            if app.urls.finish_delete(token, result) == DeleteOutcome::Reload {
                load_page(app, Page::Urls);
            }
        }

        TaskResult::UrlGrpSubmitted(token, result) => {
            let outcome = app.url_grp_form.controller.finish_submit(token, result);
            apply_submit(app, Page::UrlGrpForm, token, outcome);
        }

        TaskResult::UrlSubmitted(token, result) => {
            let outcome = app.url_form.controller.finish_submit(token, result);
            apply_submit(app, Page::UrlForm, token, outcome);
        }

        TaskResult::RedirectDue { from, token } => {
            let still_here = app.current_page == from
                && match from {
                    Page::UrlGrpForm => app.url_grp_form.controller.generation().is_current(token),
                    Page::UrlForm => app.url_form.controller.generation().is_current(token),
                    _ => false,
                };
            if let (true, Some(parent)) = (still_here, from.parent()) {
                navigate(app, parent);
            }
        }
    }
}

fn apply_submit(
    app: &mut App,
    from: Page,
    token: RequestToken,
    outcome: Option<SubmitOutcome>,
) {
    match outcome {
        Some(SubmitOutcome::Succeeded { message, after }) => {
            app.notifications.show_success(message);
            match (after, from.parent()) {
                (AfterSuccess::Immediate, Some(parent)) => navigate(app, parent),
                (AfterSuccess::Delayed(delay), _) => {
                    app.set_status(t().form.redirecting);
                    app.dispatch(Command::Redirect { from, token, delay });
                }
                (AfterSuccess::Immediate, None) => {}
            }
        }
        // 错误信息显示在表单内；API 错误同时已进入全局通知
        Some(SubmitOutcome::Failed { .. }) => app.clear_status(),
        None => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use portfolio_admin_client::ApiError;
    use portfolio_admin_core::controllers::{FormStatus, URL_FORM_REDIRECT_DELAY};
    use portfolio_admin_core::types::{Envelope, Url, UrlGrp};
    use portfolio_admin_core::{CoreError, NotificationKind};
    use serde_json::Value;

    use super::*;
    use crate::message::{AppMessage, FormMessage};
    use crate::model::FormState;
    use crate::update::test_support::{app, run};

    fn group(id: i64, name: &str) -> UrlGrp {
        UrlGrp {
            id,
            name: name.to_string(),
            is_enable: true,
        }
    }

    fn valid_url() -> Url {
        Url {
            id: 3,
            name: "GitHub".to_string(),
            link: "https://github.com".to_string(),
            is_enable: true,
            id_url_grp: 1,
        }
    }

    fn business_error(message: &str) -> CoreError {
        CoreError::Api(ApiError::Business {
            endpoint: "portfolio/url-grps".to_string(),
            status_code: 400,
            message: message.to_string(),
        })
    }

    #[test]
    fn stale_list_result_is_dropped() {
        let mut app = app();
        navigate(&mut app, Page::UrlGrps);
        let old = app.url_grps.generation().current_token();
        load_page(&mut app, Page::UrlGrps);

        run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlGrpsLoaded(
                old,
                Ok(vec![group(1, "viejo")]),
            ))],
        );
        assert!(app.url_grps.state().is_loading());
    }

    #[test]
    fn result_after_leaving_page_is_dropped() {
        let mut app = app();
        navigate(&mut app, Page::Projects);
        let token = app.projects.generation().current_token();
        navigate(&mut app, Page::Home);

        run(
            &mut app,
            [AppMessage::Task(TaskResult::ProjectsLoaded(
                token,
                Ok(vec![Value::String("p".to_string())]),
            ))],
        );
        assert!(app.projects.items().is_empty());
    }

    #[test]
    fn urls_stay_loading_until_groups_arrive() {
        let mut app = app();
        navigate(&mut app, Page::Urls);
        let token = app.urls.generation().current_token();

        run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlsLoaded(token, Ok(vec![valid_url()])))],
        );
        assert!(app.urls.state().is_loading());

        run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlListGroupsLoaded(
                token,
                Err(business_error("sin grupos")),
            ))],
        );
        let rows = app.urls.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group.id, 1);
    }

    #[test]
    fn successful_delete_reloads_list() {
        let mut app = app();
        navigate(&mut app, Page::UrlGrps);
        let token = app.url_grps.begin_delete();
        app.take_commands();

        let commands = run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlGrpDeleted(
                token,
                Ok(Envelope::success(Value::Bool(true))),
            ))],
        );
        assert!(matches!(commands.as_slice(), [Command::LoadUrlGrps(_)]));
    }

    #[test]
    fn delete_finishing_after_refresh_still_reloads() {
        let mut app = app();
        navigate(&mut app, Page::Urls);
        let token = app.urls.begin_delete();
        run(&mut app, [AppMessage::Refresh]);

        let commands = run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlDeleted(
                token,
                Ok(Envelope::success(Value::Null)),
            ))],
        );
        assert!(matches!(commands.as_slice(), [Command::LoadUrls(_)]));
    }

    #[test]
    fn failed_delete_keeps_list() {
        let mut app = app();
        navigate(&mut app, Page::UrlGrps);
        let token = app.url_grps.begin_delete();
        app.take_commands();

        let commands = run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlGrpDeleted(
                token,
                Err(business_error("en uso")),
            ))],
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn group_success_returns_immediately() {
        let mut app = app();
        app.url_grp_form = FormState::new(Some(group(2, "Redes")));
        navigate(&mut app, Page::UrlGrpForm);
        let commands = run(&mut app, [AppMessage::Form(FormMessage::Submit)]);
        let [Command::SubmitUrlGrp(submission)] = commands.as_slice() else {
            panic!("expected submit, got {commands:?}");
        };

        let commands = run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlGrpSubmitted(
                submission.token,
                Ok(Envelope::success(Value::Null)),
            ))],
        );
        assert_eq!(app.current_page, Page::UrlGrps);
        assert!(matches!(commands.as_slice(), [Command::LoadUrlGrps(_)]));
        let notification = app.notifications.current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Grupo actualizado correctamente");
    }

    #[test]
    fn url_success_waits_before_returning() {
        let mut app = app();
        app.url_form = FormState::new(None);
        navigate(&mut app, Page::UrlForm);
        app.url_form.controller.update_field(|u| *u = Url { id: 0, ..valid_url() });
        app.take_commands();

        let commands = run(&mut app, [AppMessage::Form(FormMessage::Submit)]);
        let [Command::SubmitUrl(submission)] = commands.as_slice() else {
            panic!("expected submit, got {commands:?}");
        };
        let token = submission.token;

        let commands = run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlSubmitted(
                token,
                Ok(Envelope::success(Value::Null)),
            ))],
        );
        assert_eq!(app.current_page, Page::UrlForm);
        assert_eq!(app.url_form.controller.success_message(), Some("Url creada correctamente"));
        assert_eq!(
            commands,
            vec![Command::Redirect {
                from: Page::UrlForm,
                token,
                delay: URL_FORM_REDIRECT_DELAY,
            }]
        );

        run(
            &mut app,
            [AppMessage::Task(TaskResult::RedirectDue {
                from: Page::UrlForm,
                token,
            })],
        );
        assert_eq!(app.current_page, Page::Urls);
    }

    #[test]
    fn redirect_ignored_after_user_left_form() {
        let mut app = app();
        navigate(&mut app, Page::UrlForm);
        let token = app.url_form.controller.generation().current_token();
        navigate(&mut app, Page::Projects);

        run(
            &mut app,
            [AppMessage::Task(TaskResult::RedirectDue {
                from: Page::UrlForm,
                token,
            })],
        );
        assert_eq!(app.current_page, Page::Projects);
    }

    #[test]
    fn failed_submit_stays_on_form_with_message() {
        let mut app = app();
        app.url_grp_form = FormState::new(Some(group(2, "Redes")));
        navigate(&mut app, Page::UrlGrpForm);
        let commands = run(&mut app, [AppMessage::Form(FormMessage::Submit)]);
        let [Command::SubmitUrlGrp(submission)] = commands.as_slice() else {
            panic!("expected submit, got {commands:?}");
        };

        run(
            &mut app,
            [AppMessage::Task(TaskResult::UrlGrpSubmitted(
                submission.token,
                Err(business_error("Nombre duplicado")),
            ))],
        );
        assert_eq!(app.current_page, Page::UrlGrpForm);
        assert_eq!(app.url_grp_form.controller.status(), FormStatus::SubmitFailed);
        assert_eq!(app.url_grp_form.controller.error(), Some("Nombre duplicado"));
    }
}
