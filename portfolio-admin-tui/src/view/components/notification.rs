//! 全局通知对话框
//!
//! 读取 NotificationCenter 的当前值；同一时间只显示一条，
//! 新通知直接替换旧通知。

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use portfolio_admin_core::NotificationKind;

use super::{centered_rect, dialog_inner};
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

const MIN_WIDTH: u16 = 36;
const MAX_WIDTH: u16 = 72;

/// 渲染全局通知（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(notification) = app.notifications.current() else {
        return;
    };
    let texts = t();
    let c = colors();

    let (title, accent) = match notification.kind {
        NotificationKind::Error => (texts.modal.notification_error, c.error),
        NotificationKind::Success => (texts.modal.notification_success, c.success),
    };

    let (width, text_rows) = dialog_size(&notification.message);
    let area = centered_rect(width, text_rows + 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(c.dialog_bg));
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(notification.message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(texts.modal.press_to_close, Styles::muted()),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, dialog_inner(area));
}

/// 对话框宽度和消息占用的行数
fn dialog_size(message: &str) -> (u16, u16) {
    let text_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(4).clamp(MIN_WIDTH, MAX_WIDTH);
    let inner = width - 4;
    let rows = text_width.div_ceil(inner).max(1);
    (width, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_use_min_width() {
        assert_eq!(dialog_size("ok"), (MIN_WIDTH, 1));
    }

    #[test]
    fn long_messages_wrap() {
        let message = "x".repeat(200);
        let (width, rows) = dialog_size(&message);
        assert_eq!(width, MAX_WIDTH);
        assert_eq!(rows, 200_u16.div_ceil(MAX_WIDTH - 4));
    }
}
