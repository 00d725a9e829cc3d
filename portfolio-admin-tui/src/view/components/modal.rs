//! 弹窗组件

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect, dialog_inner};
use crate::i18n::t;
use crate::model::{App, DeleteTarget, Modal};
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    match app.modal.active {
        Some(Modal::ConfirmDelete {
            target,
            ref item_name,
            focus,
        }) => render_confirm_delete(frame, target, item_name, focus),
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, target: DeleteTarget, item_name: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_delete_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.dialog_bg));
    frame.render_widget(block, area);

    let question = match target {
        DeleteTarget::UrlGrp { .. } => texts.modal.confirm_delete_group,
        DeleteTarget::Url { .. } => texts.modal.confirm_delete_url,
    };

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {question}"), Style::default().fg(c.fg)),
        Line::styled(
            format!("  \"{item_name}\""),
            Style::default().fg(c.warning),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), dialog_inner(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let c = colors();

    let height = u16::try_from(help.lines.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.dialog_bg));
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    lines.extend(help.lines.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(
                format!("{key:<16}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Styles::muted()),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), dialog_inner(area));
}
