//! 分组列表页面

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::Text,
    widgets::{Row, Table, TableState},
};

use super::{enabled_label, render_placeholder};
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染分组列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    if render_placeholder(app.url_grps.state(), texts.url_grps.empty, frame, area) {
        return;
    }

    let c = colors();
    let header = Row::new(vec![
        texts.url_grps.col_id,
        texts.url_grps.col_name,
        texts.url_grps.col_status,
    ])
    .style(Styles::title());

    let rows = app.url_grps.items().iter().map(|group| {
        let status_style = if group.is_enable {
            Style::default().fg(c.success)
        } else {
            Styles::muted()
        };
        Row::new(vec![
            Text::raw(group.id.to_string()),
            Text::raw(group.name.as_str()),
            Text::styled(enabled_label(group.is_enable), status_style),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(app.url_grps.selected_index()));
    frame.render_stateful_widget(table, area, &mut state);
}
