//! 首页视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::styled(format!("  {}", texts.home.welcome_desc), Styles::muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}: ", texts.home.api_url), Styles::muted()),
            Span::styled(app.api_url.as_str(), Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::styled(format!("  {}", texts.home.get_started), Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
