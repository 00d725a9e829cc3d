//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在快捷键之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.notifications.current().is_some() || app.modal.is_open() {
        return vec![("Esc", h.close)];
    }

    let mut hints = vec![("Tab", h.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Home => {}
            Page::UrlGrps | Page::Urls => {
                hints.push(("↑↓", h.select));
                hints.push(("Alt+a", h.add));
                hints.push(("Alt+e", h.edit));
                hints.push(("Alt+d", h.delete));
                if app.current_page == Page::Urls {
                    hints.push(("Alt+f", h.filter));
                }
                hints.push(("Alt+r", h.reload));
            }
            Page::Projects => {
                hints.push(("↑↓", h.select));
                hints.push(("Alt+r", h.reload));
            }
            Page::UrlGrpForm | Page::UrlForm => {
                hints[0] = ("Tab", h.next_field);
                hints.push(("Space", h.toggle));
                if app.current_page == Page::UrlForm {
                    hints.push(("←→", h.change_group));
                }
                hints.push(("Alt+s", h.submit));
                hints.push(("Esc", h.back));
            }
        },
    }

    hints.push(("Alt+h", h.help));
    hints.push(("Alt+q", h.quit));
    hints
}
