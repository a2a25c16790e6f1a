//! Dashboard view rendering.
//!
//! Left column: the live widgets fed by the simulation (vibration gauge,
//! gas readout, event log). Right column: the executive KPI row, the
//! cost-variation chart, and the official breakdown table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::finance::format_money;
use crate::sim::VIBRATION_RANGE;

use super::common::sparkline_string;

/// Full-scale value for the vibration gauge. The walk tops out at 4.9, so
/// the bar never quite fills.
const GAUGE_FULL_SCALE: f64 = 5.0;

/// Render the Dashboard view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([Constraint::Length(34), Constraint::Min(40)]).split(area);

    render_sidebar(frame, app, columns[0]);
    render_main(frame, app, columns[1]);
}

/// The live-telemetry column.
fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .split(area);

    render_vibration(frame, app, rows[0]);
    render_gas(frame, app, rows[1]);
    render_event_log(frame, app, rows[2]);
}

fn render_vibration(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" SAG Mill (vibration) ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref telemetry) = app.telemetry else {
        frame.render_widget(
            Paragraph::new("awaiting telemetry...").style(Style::default().add_modifier(Modifier::DIM)),
            inner,
        );
        return;
    };

    let reading = telemetry.reading;
    let alert = reading.vibration_alert();
    let lines = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let value = Line::from(vec![
        Span::styled(
            format!("{:>4}", reading.vibration),
            app.theme.alert_style(alert).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" mm/s", Style::default().add_modifier(Modifier::DIM)),
        Span::raw("  "),
        Span::styled(
            if alert { "ALERT" } else { "normal" },
            app.theme.alert_style(alert),
        ),
    ]);
    frame.render_widget(Paragraph::new(value), lines[0]);

    let gauge_style = if alert {
        Style::default().fg(app.theme.critical)
    } else {
        Style::default().fg(app.theme.accent)
    };
    let gauge = Gauge::default()
        .gauge_style(gauge_style)
        .ratio((reading.vibration / GAUGE_FULL_SCALE).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, lines[1]);

    let spark = sparkline_string(&app.history.vibration_sparkline(), inner.width as usize);
    frame.render_widget(
        Paragraph::new(spark).style(Style::default().fg(app.theme.accent)),
        lines[2],
    );
}

fn render_gas(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Tunnel N2 (gas) ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref telemetry) = app.telemetry else {
        return;
    };

    let lines = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
    let value = Line::from(vec![
        Span::styled(
            format!("{:>3}", telemetry.reading.gas_level),
            Style::default().fg(app.theme.healthy).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ppm", Style::default().add_modifier(Modifier::DIM)),
    ]);
    frame.render_widget(Paragraph::new(value), lines[0]);

    let spark = sparkline_string(&app.history.gas_sparkline(), inner.width as usize);
    frame.render_widget(
        Paragraph::new(spark).style(Style::default().fg(app.theme.healthy)),
        lines[1],
    );
}

fn render_event_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Live Event Log ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let items: Vec<ListItem> = match &app.telemetry {
        Some(telemetry) => telemetry
            .log
            .iter()
            .map(|entry| {
                let message_style = if entry.is_alert() {
                    Style::default().fg(app.theme.critical).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", entry.time),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(entry.message.clone(), message_style),
                ]))
            })
            .collect(),
        None => vec![ListItem::new("connecting...")],
    };

    frame.render_widget(List::new(items).block(block), area);
}

/// The executive column.
fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(7),
        Constraint::Length(9),
    ])
    .split(area);

    render_kpi_row(frame, app, rows[0]);
    render_variation_chart(frame, app, rows[1]);
    render_breakdown_table(frame, app, rows[2]);
}

fn render_kpi_row(frame: &mut Frame, app: &App, area: Rect) {
    let tiles = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(area);

    let plan = &app.plan;
    let display_budget = if app.optimized {
        plan.total_projected()
    } else {
        plan.total_current()
    };
    let savings = if app.optimized { plan.total_savings() } else { 0 };

    render_stat_tile(
        frame,
        app,
        tiles[0],
        "Annual Budget",
        &format_money(display_budget as i64),
        if app.optimized { "IoT scenario" } else { "current scenario" },
        false,
    );
    render_stat_tile(
        frame,
        app,
        tiles[1],
        "Potential Savings",
        &format_money(savings),
        if app.optimized { "captured" } else { "latent" },
        app.optimized,
    );
    render_stat_tile(
        frame,
        app,
        tiles[2],
        "Estimated ROI",
        plan.kpis.roi,
        "payback < 12 months",
        true,
    );

    // Verdict card, accent-colored like nothing else on screen.
    let verdict = Paragraph::new(vec![
        Line::from(Span::styled(
            "Financial Verdict",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            "Project Approved",
            Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("✓ VIABLE", Style::default().fg(app.theme.healthy))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.accent)),
    );
    frame.render_widget(verdict, tiles[3]);
}

fn render_stat_tile(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: &str,
    subtext: &str,
    positive: bool,
) {
    let value_style = if positive {
        Style::default().fg(app.theme.healthy).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let tile = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(value.to_string(), value_style)),
        Line::from(Span::styled(
            subtext.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );
    frame.render_widget(tile, area);
}

/// Horizontal current-vs-projected bars, one category pair per line.
fn render_variation_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Cost Variation Analysis ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_amount = app
        .plan
        .lines
        .iter()
        .map(|line| line.current.max(line.projected))
        .max()
        .unwrap_or(1)
        .max(1);

    let label_width = 26usize;
    let bar_width = (inner.width as usize).saturating_sub(label_width + 12).max(8);

    let mut lines: Vec<Line> = Vec::new();
    for budget_line in &app.plan.lines {
        if budget_line.current == 0 && budget_line.projected == 0 {
            continue;
        }
        let name = short_category(budget_line.category);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<label_width$}", name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                bar(budget_line.current, max_amount, bar_width),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::raw(format!(" {}", format_money(budget_line.current as i64))),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(label_width)),
            Span::styled(
                bar(budget_line.projected, max_amount, bar_width),
                Style::default().fg(app.theme.accent),
            ),
            Span::raw(format!(" {}", format_money(budget_line.projected as i64))),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Strip the "1. " ordinal for the chart labels.
fn short_category(category: &str) -> &str {
    category.split_once(". ").map_or(category, |(_, rest)| rest)
}

fn bar(value: u64, max: u64, width: usize) -> String {
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_breakdown_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Current"),
        Cell::from("IoT"),
        Cell::from("Delta"),
        Cell::from("Impact"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = app
        .plan
        .lines
        .iter()
        .map(|line| {
            let variation = line.variation();
            let impact = line
                .impact_pct()
                .map(|pct| format!("{:+.1}%", pct))
                .unwrap_or_else(|| "new".to_string());
            Row::new(vec![
                Cell::from(line.category),
                Cell::from(format!("{:>10}", crate::data::finance::format_thousands(line.current as i64))),
                Cell::from(format!("{:>10}", crate::data::finance::format_thousands(line.projected as i64))),
                Cell::from(format!("{:>9}", crate::data::finance::format_thousands(variation)))
                    .style(app.theme.variation_style(variation)),
                Cell::from(impact).style(app.theme.variation_style(variation)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Min(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Official Financial Breakdown ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 100, 4), "░░░░");
        assert_eq!(bar(100, 100, 4), "████");
        assert_eq!(bar(50, 100, 4), "██░░");
    }

    #[test]
    fn test_short_category_strips_ordinal() {
        assert_eq!(short_category("2. Third-Party Services"), "Third-Party Services");
        assert_eq!(short_category("No ordinal"), "No ordinal");
    }

    #[test]
    fn test_gauge_ratio_stays_in_unit_range() {
        let (_, hi) = VIBRATION_RANGE;
        assert!(hi / GAUGE_FULL_SCALE <= 1.0);
    }
}
