//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 全局通知在最上层，先关闭它
    if app.notifications.current().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::DismissNotification,
            _ => AppMessage::Noop,
        };
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // 表单页的 Tab 用于切换字段
    if app.focus.is_content() && app.current_page.is_form() {
        return handle_form_keys(key);
    }

    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 非输入场景下 ? 也能打开帮助
    if key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理列表页的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleFilter);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理表单页的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORM_SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Left => AppMessage::Form(FormMessage::CycleOption { backwards: true }),
        KeyCode::Right => AppMessage::Form(FormMessage::CycleOption { backwards: false }),
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => match key.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Some(Modal::Help) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use portfolio_admin_core::NotificationCenter;

    use super::*;
    use crate::model::{DeleteTarget, FocusPanel, Page};

    fn app() -> App {
        App::new(NotificationCenter::new(), "http://localhost:5000/api")
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT))
    }

    fn content_app(page: Page) -> App {
        let mut app = app();
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn ctrl_c_always_quits() {
        let app = app();
        app.notifications.show_error("x");
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(event, &app), AppMessage::Quit));
    }

    #[test]
    fn notification_swallows_other_keys() {
        let app = app();
        app.notifications.show_error("x");
        assert!(matches!(handle_event(alt('a'), &app), AppMessage::Noop));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::DismissNotification
        ));
    }

    #[test]
    fn navigation_keys_when_menu_focused() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::ToggleFocus
        ));
    }

    #[test]
    fn list_shortcuts() {
        let app = content_app(Page::Urls);
        assert!(matches!(
            handle_event(alt('a'), &app),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_event(alt('d'), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(alt('f'), &app),
            AppMessage::Content(ContentMessage::CycleFilter)
        ));
        assert!(matches!(handle_event(alt('r'), &app), AppMessage::Refresh));
    }

    #[test]
    fn form_captures_text_and_tab() {
        let app = content_app(Page::UrlForm);
        assert!(matches!(
            handle_event(press(KeyCode::Char('k')), &app),
            AppMessage::Form(FormMessage::Input('k'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Form(FormMessage::NextField)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::GoBack
        ));
    }

    #[test]
    fn confirm_dialog_keys() {
        let mut app = content_app(Page::UrlGrps);
        app.modal
            .show_confirm_delete(DeleteTarget::UrlGrp { id: 1 }, "Redes");
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(alt('q'), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn release_events_ignored() {
        let app = app();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
