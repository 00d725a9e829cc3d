//! URL 列表页面

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Row, Table, TableState},
};

use super::{enabled_label, render_placeholder};
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染 URL 列表：顶部一行过滤条件 + 表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let filter = app.urls.filter_label().unwrap_or(texts.urls.all_groups);
    let filter_line = Line::from(vec![
        Span::styled(format!(" {}: ", texts.urls.filter), Styles::muted()),
        Span::styled(filter, Style::default().fg(c.warning)),
    ]);
    frame.render_widget(Paragraph::new(filter_line), layout[0]);

    if render_placeholder(&app.urls.state(), texts.urls.empty, frame, layout[1]) {
        return;
    }

    let header = Row::new(vec![
        texts.urls.col_name,
        texts.urls.col_link,
        texts.urls.col_group,
        texts.urls.col_status,
    ])
    .style(Styles::title());

    let rows: Vec<Row> = app
        .urls
        .visible_rows()
        .into_iter()
        .map(|row| {
            let group = if row.group.name.is_empty() {
                Text::styled(texts.urls.unknown_group, Styles::muted())
            } else {
                Text::raw(row.group.name)
            };
            let status_style = if row.is_enable {
                Style::default().fg(c.success)
            } else {
                Styles::muted()
            };
            Row::new(vec![
                Text::raw(row.name),
                Text::raw(row.link),
                group,
                Text::styled(enabled_label(row.is_enable), status_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(app.urls.selected_index()));
    frame.render_stateful_widget(table, layout[1], &mut state);
}
