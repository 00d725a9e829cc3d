//! 表单页面（分组 / URL）
//!
//! 两个表单共用同一套字段渲染；字段顺序来自 [`FormFields::FIELDS`]。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use portfolio_admin_core::controllers::{FormEntity, FormStatus};

use crate::i18n::t;
use crate::model::{App, FieldKind, FormFields, FormState};
use crate::view::theme::{Styles, colors};

/// 渲染分组表单
pub fn render_url_grp(app: &App, frame: &mut Frame, area: Rect) {
    let lines = form_lines(&app.url_grp_form, |_| String::new());
    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染 URL 表单
pub fn render_url(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let options = &app.group_options;
    let lines = form_lines(&app.url_form, |form| {
        if options.is_loading() {
            return texts.form.loading_groups.to_string();
        }
        let id = form.controller.value().id_url_grp;
        options
            .name_of(id)
            .map_or_else(|| texts.form.select_group.to_string(), str::to_string)
    });
    frame.render_widget(Paragraph::new(lines), area);
}

fn field_label(field: FieldKind) -> &'static str {
    let form = &t().form;
    match field {
        FieldKind::Name => form.name,
        FieldKind::Link => form.link,
        FieldKind::Group => form.group,
        FieldKind::Enabled => form.enabled,
    }
}

/// 构建表单的全部行：字段 + 提交状态
fn form_lines<T, F>(form: &FormState<T>, group_display: F) -> Vec<Line<'static>>
where
    T: FormEntity + FormFields,
    F: Fn(&FormState<T>) -> String,
{
    let texts = t();
    let c = colors();
    let focused_field = form.focused_field();
    let mut lines = vec![Line::from("")];

    for &field in T::FIELDS {
        let focused = field == focused_field;
        let label_style = if focused {
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Styles::muted()
        };
        let value_style = if focused {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.fg)
        };

        let value = match field {
            FieldKind::Name | FieldKind::Link => {
                let text = form.controller.value().text(field).unwrap_or_default();
                if focused {
                    format!("{text}▎")
                } else {
                    text.to_string()
                }
            }
            FieldKind::Group => {
                let name = group_display(form);
                if focused {
                    format!("◀ {name} ▶")
                } else {
                    name
                }
            }
            FieldKind::Enabled => {
                let enabled = form.controller.value().enabled();
                format!("[{}]", if enabled { "x" } else { " " })
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", field_label(field)), label_style),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }

    match form.controller.status() {
        FormStatus::Submitting => {
            lines.push(Line::styled(
                format!("  {}", texts.form.submitting),
                Style::default().fg(c.warning),
            ));
        }
        FormStatus::Succeeded => {
            if let Some(message) = form.controller.success_message() {
                lines.push(Line::styled(
                    format!("  ✓ {message}"),
                    Style::default().fg(c.success),
                ));
            }
        }
        FormStatus::ValidationFailed | FormStatus::SubmitFailed => {
            if let Some(error) = form.controller.error() {
                lines.push(Line::styled(
                    format!("  ⚠ {error}"),
                    Style::default().fg(c.error),
                ));
            }
        }
        FormStatus::Idle => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Alt+s", Styles::hint_key()),
        Span::styled(format!(" {}   ", texts.common.save), Styles::muted()),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(format!(" {}", texts.common.cancel), Styles::muted()),
    ]));

    lines
}
