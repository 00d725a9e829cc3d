//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在内容之上，全局通知在最上层
    components::modal::render(app, frame);
    components::notification::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 页面标题
fn page_title(app: &App) -> &'static str {
    let texts = t();
    match app.current_page {
        Page::Home => texts.nav.home,
        Page::UrlGrps => texts.url_grps.title,
        Page::UrlGrpForm if app.url_grp_form.controller.is_edit() => texts.form.edit_group,
        Page::UrlGrpForm => texts.form.new_group,
        Page::Urls => texts.urls.title,
        Page::UrlForm if app.url_form.controller.is_edit() => texts.form.edit_url,
        Page::UrlForm => texts.form.new_url,
        Page::Projects => texts.projects.title,
    }
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", page_title(app)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::UrlGrps => pages::url_grps::render(app, frame, inner_area),
        Page::UrlGrpForm => pages::form::render_url_grp(app, frame, inner_area),
        Page::Urls => pages::urls::render(app, frame, inner_area),
        Page::UrlForm => pages::form::render_url(app, frame, inner_area),
        Page::Projects => pages::projects::render(app, frame, inner_area),
    }
}
