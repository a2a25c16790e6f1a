//! Balanced-scorecard view rendering.
//!
//! A 2x2 grid of perspective panels, each holding two KPI cards: title,
//! description, formula, target against current, and the canned trend
//! sparkline.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::KpiCard;

use super::common::sparkline_string;

/// Render the Scorecard view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
    let top = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[0]);
    let bottom =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[1]);
    let cells = [top[0], top[1], bottom[0], bottom[1]];

    for ((perspective, kpis), cell) in app.scorecard.iter().zip(cells) {
        render_perspective(frame, app, cell, perspective.label(), kpis);
    }
}

fn render_perspective(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    label: &'static str,
    kpis: &[KpiCard],
) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for kpi in kpis {
        lines.push(Line::from(Span::styled(
            kpi.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            kpi.desc,
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(vec![
            Span::styled("formula ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(kpi.formula),
        ]));
        lines.push(Line::from(vec![
            Span::styled("target ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(kpi.target),
            Span::raw("  "),
            Span::styled("now ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(kpi.current, Style::default().fg(app.theme.healthy)),
        ]));
        lines.push(Line::from(Span::styled(
            sparkline_string(&kpi.trend.pattern(), 8),
            Style::default().fg(app.theme.accent),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
