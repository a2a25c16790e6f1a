//! Login screen rendering.
//!
//! A centered form with the two credential fields and the transient
//! notice line. The gate itself lives in [`crate::auth`]; this file only
//! draws it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::auth::Field;

/// Render the full-screen login gate.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form_width = 52u16.min(area.width.saturating_sub(4));
    let form_height = 16u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(form_width)) / 2;
    let y = area.y + (area.height.saturating_sub(form_height)) / 2;
    let form_area = Rect::new(x, y, form_width, form_height);

    let mut lines = vec![
        Line::from(Span::styled(
            "◆ SAN LORENZO DIVISION",
            Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Industrial IoT Monitoring System",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        field_line("Corporate user", &app.auth.user_input, app.auth.focus == Field::User, app),
        Line::from(""),
        field_line(
            "Password",
            &"•".repeat(app.auth.password_input.chars().count()),
            app.auth.focus == Field::Password,
            app,
        ),
        Line::from(""),
    ];

    if app.auth.is_pending() {
        lines.push(Line::from(Span::styled(
            "  Signing in...",
            Style::default().fg(app.theme.accent),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Enter:sign in  Tab:next field  Esc:quit",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    if let Some(notice) = &app.auth.notice {
        let style = if notice.is_error {
            Style::default().fg(app.theme.critical)
        } else {
            Style::default().fg(app.theme.accent)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", notice.text), style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "For authorized personnel only. Access is audited.",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let block = Block::default()
        .title(" Restricted Access ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    frame.render_widget(Clear, form_area);
    frame.render_widget(Paragraph::new(lines).block(block), form_area);
}

/// One labelled input line, with a cursor marker on the focused field.
fn field_line<'a>(label: &'a str, value: &str, focused: bool, app: &App) -> Line<'a> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<16}", label), label_style),
        Span::raw(format!("{}{}", value, cursor)),
    ])
}
