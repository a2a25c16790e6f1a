//! Budget breakdown view rendering.
//!
//! Three tables derived from the same plan: the base scenario with
//! participation shares, the IoT scenario with per-line variations, and
//! the side-by-side comparison with deltas.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::finance::format_thousands;

/// Render the Budget view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line_count = app.plan.lines.len() as u16;
    let rows = Layout::vertical([
        Constraint::Length(line_count + 3),
        Constraint::Length(line_count + 3),
        Constraint::Min(line_count + 3),
    ])
    .split(area);

    render_base_scenario(frame, app, rows[0]);
    render_iot_scenario(frame, app, rows[1]);
    render_comparison(frame, app, rows[2]);
}

fn bordered_block(app: &App, title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

fn total_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Annual OPEX under the current run-to-failure model.
fn render_base_scenario(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from("Description"),
        Cell::from("Amount (M$)"),
        Cell::from("Share"),
    ])
    .height(1)
    .style(app.theme.header);

    let mut rows: Vec<Row> = app
        .plan
        .lines
        .iter()
        .filter(|line| line.current > 0)
        .map(|line| {
            Row::new(vec![
                Cell::from(line.category),
                Cell::from(line.detail).style(Style::default().add_modifier(Modifier::DIM)),
                Cell::from(format!("{:>10}", format_thousands(line.current as i64))),
                Cell::from(format!("{:>6.1}%", app.plan.share_pct(line))),
            ])
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from("TOTAL OPEX BUDGET"),
            Cell::from(""),
            Cell::from(format!("{:>10}", format_thousands(app.plan.total_current() as i64))),
            Cell::from(" 100.0%"),
        ])
        .style(total_style()),
    );

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Min(12),
        Constraint::Min(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(bordered_block(app, " 1. Base Scenario (run-to-failure) "));
    frame.render_widget(table, area);
}

/// Annual OPEX with the IoT program in place.
fn render_iot_scenario(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from("Description"),
        Cell::from("Amount (M$)"),
        Cell::from("Variation"),
    ])
    .height(1)
    .style(app.theme.header);

    let mut rows: Vec<Row> = app
        .plan
        .lines
        .iter()
        .map(|line| {
            let impact = line
                .impact_pct()
                .map(|pct| format!("{:>6.1}%", pct))
                .unwrap_or_else(|| "   N/A".to_string());
            Row::new(vec![
                Cell::from(line.category),
                Cell::from(line.note).style(Style::default().add_modifier(Modifier::DIM)),
                Cell::from(format!("{:>10}", format_thousands(line.projected as i64))),
                Cell::from(impact).style(app.theme.variation_style(line.variation())),
            ])
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from("TOTAL OPEX BUDGET"),
            Cell::from(""),
            Cell::from(format!("{:>10}", format_thousands(app.plan.total_projected() as i64))),
            Cell::from(format!("{:>6.1}%", app.plan.reduction_pct())),
        ])
        .style(total_style()),
    );

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Min(12),
        Constraint::Min(9),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(bordered_block(app, " 2. IoT Scenario (predictive) "));
    frame.render_widget(table, area);
}

/// Both scenarios side by side with the resulting deltas.
fn render_comparison(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from("Without (M$)"),
        Cell::from("With (M$)"),
        Cell::from("Delta"),
    ])
    .height(1)
    .style(app.theme.header);

    let mut rows: Vec<Row> = app
        .plan
        .lines
        .iter()
        .map(|line| {
            let variation = line.variation();
            Row::new(vec![
                Cell::from(line.category),
                Cell::from(format!("{:>10}", format_thousands(line.current as i64))),
                Cell::from(format!("{:>10}", format_thousands(line.projected as i64))),
                Cell::from(format!("{:>9}", format_thousands(variation)))
                    .style(app.theme.variation_style(variation)),
            ])
        })
        .collect();

    let total_delta = -app.plan.total_savings();
    rows.push(
        Row::new(vec![
            Cell::from("TOTAL BUDGET"),
            Cell::from(format!("{:>10}", format_thousands(app.plan.total_current() as i64))),
            Cell::from(format!("{:>10}", format_thousands(app.plan.total_projected() as i64))),
            Cell::from(format!("{:>9}", format_thousands(total_delta)))
                .style(app.theme.variation_style(total_delta)),
        ])
        .style(total_style()),
    );

    let widths = [
        Constraint::Fill(2),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(bordered_block(app, " 3. Scenario Comparison "));
    frame.render_widget(table, area);
}
