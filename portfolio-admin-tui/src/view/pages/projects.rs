//! 公开项目页面（只读）

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use portfolio_admin_core::types::project_label;

use super::render_placeholder;
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染项目列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    if render_placeholder(app.projects.state(), texts.projects.empty, frame, area) {
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let projects = app.projects.items();
    let count = Line::from(Span::styled(
        format!(" {} {}", projects.len(), texts.projects.count),
        Styles::muted(),
    ));
    frame.render_widget(Paragraph::new(count), layout[0]);

    let fg = colors().fg;
    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            ListItem::new(Line::styled(
                format!("  {}", project_label(project)),
                Style::default().fg(fg),
            ))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(app.projects.selected_index()));
    frame.render_stateful_widget(list, layout[1], &mut state);
}
