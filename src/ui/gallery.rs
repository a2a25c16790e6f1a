//! Media gallery view rendering.
//!
//! A selectable list of the digital-twin footage items, with a detail
//! overlay for the selected item. The terminal shows metadata and a mock
//! transport bar; it does not decode media.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::MediaKind;

/// Render the Gallery view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Badge"),
        Cell::from("Kind"),
        Cell::from("Title"),
        Cell::from("Description"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = app
        .gallery
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.badge.label()).style(app.theme.badge_style(item.badge)),
                Cell::from(item.kind.label()),
                Cell::from(item.title).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(item.desc).style(Style::default().add_modifier(Modifier::DIM)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Fill(2),
        Constraint::Fill(3),
    ];

    let title = format!(
        " Simulation Gallery · Digital Twin [{}/{}] ",
        app.selected_media_index + 1,
        app.gallery.len()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_media_index));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the media detail overlay for the selected item.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(item) = app.selected_media() else {
        return;
    };

    let width = 60u16.min(area.width.saturating_sub(4));
    let height = 14u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(item.badge.label(), app.theme.badge_style(item.badge)),
            Span::raw("  "),
            Span::styled(item.title, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(item.desc),
        Line::from(""),
        Line::from(vec![
            Span::styled("Source     ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(item.source),
        ]),
        Line::from(vec![
            Span::styled("Data feed  ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(item.feed_label, Style::default().fg(app.theme.accent)),
        ]),
    ];

    if item.kind == MediaKind::Video {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("▶ ", Style::default().fg(app.theme.accent)),
            Span::styled("━━━━●─────────", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("  00:34 / 02:15"),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc:close  ↑↓:browse",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let block = Block::default()
        .title(" Media Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    frame.render_widget(Clear, overlay_area);
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
