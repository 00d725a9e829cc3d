//! 页面视图

pub mod form;
pub mod home;
pub mod projects;
pub mod url_grps;
pub mod urls;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use portfolio_admin_core::controllers::LoadState;

use crate::i18n::t;
use crate::view::theme::{Styles, colors};

/// 加载中、出错或为空时渲染占位内容。
/// 返回 `true` 表示已渲染，调用方不再画列表。
fn render_placeholder<T>(
    state: &LoadState<Vec<T>>,
    empty_text: &str,
    frame: &mut Frame,
    area: Rect,
) -> bool {
    let texts = t();
    let line = match state {
        LoadState::Loading => Line::styled(format!("  {}", texts.common.loading), Styles::muted()),
        LoadState::Error(message) => Line::styled(
            format!("  {}: {message}", texts.common.error),
            Style::default().fg(colors().error),
        ),
        LoadState::Loaded(items) if items.is_empty() => {
            Line::styled(format!("  {empty_text}"), Styles::muted())
        }
        LoadState::Loaded(_) => return false,
    };

    frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
    true
}

/// 启用状态的文本
fn enabled_label(enabled: bool) -> &'static str {
    if enabled { t().common.yes } else { t().common.no }
}
