//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help
//! overlay, plus the sparkline helper the dashboard and scorecard share.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Sparkline characters (8 levels of height).
const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render normalized 0-7 levels as a bar string, most recent last.
pub fn sparkline_string(levels: &[u8], width: usize) -> String {
    if levels.is_empty() {
        return " ".repeat(width);
    }
    let tail: Vec<u8> = levels.iter().rev().take(width).rev().copied().collect();
    let mut bars: String = tail.iter().map(|&v| SPARKLINE_CHARS[v.min(7) as usize]).collect();
    while bars.chars().count() < width {
        bars.insert(0, ' ');
    }
    bars
}

/// Render the header bar with the live system state.
///
/// Displays: status indicator, division name, current sensor values,
/// signed-in account.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " OREWATCH ",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    match &app.telemetry {
        Some(telemetry) => {
            let alert = telemetry.reading.vibration_alert();
            spans.insert(
                0,
                Span::styled(" ● ", app.theme.alert_style(alert)),
            );
            spans.extend([
                Span::raw("│ San Lorenzo Division │ "),
                Span::styled("ONLINE", Style::default().fg(app.theme.healthy)),
                Span::raw(" │ vib "),
                Span::styled(
                    format!("{} mm/s", telemetry.reading.vibration),
                    app.theme.alert_style(alert),
                ),
                Span::raw(" · gas "),
                Span::raw(format!("{} ppm", telemetry.reading.gas_level)),
            ]);
        }
        None => {
            spans.insert(0, Span::styled(" ● ", Style::default().add_modifier(Modifier::DIM)));
            spans.extend([
                Span::raw("│ San Lorenzo Division │ "),
                Span::styled("STANDBY", Style::default().add_modifier(Modifier::DIM)),
            ]);
        }
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.auth.signed_in_user().to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Dashboard "),
        Line::from(" 2:Budget "),
        Line::from(" 3:Scorecard "),
        Line::from(" 4:Gallery "),
    ];

    let selected = match app.current_view {
        View::Dashboard => 0,
        View::Budget => 1,
        View::Scorecard => 2,
        View::Gallery => 3,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the active view, simulation state, and available controls.
/// Also displays temporary status messages.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.accent));
        frame.render_widget(paragraph, area);
        return;
    }

    let sim_state = match (&app.telemetry, app.sim_running()) {
        (Some(telemetry), _) => format!(
            "{} · tick {}",
            app.source_description().unwrap_or("telemetry"),
            telemetry.ticks
        ),
        (None, true) => "telemetry starting".to_string(),
        (None, false) => "simulation paused".to_string(),
    };

    let controls = match app.current_view {
        View::Dashboard => "o:scenario e:export Tab:switch ?:help L:sign out q:quit",
        View::Budget => "o:scenario Tab:switch Esc:back ?:help q:quit",
        View::Scorecard => "Tab:switch Esc:back ?:help q:quit",
        View::Gallery => "↑↓:select Enter:detail Esc:back ?:help q:quit",
    };

    let status = format!(" {} | {} | {}", app.current_view.label(), sim_state, controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  Tab         Next view"),
        Line::from("  1-4         Jump to a view"),
        Line::from("  ↑/↓ j/k     Select gallery item"),
        Line::from("  Enter       Open media detail"),
        Line::from("  Esc         Go back"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Dashboard & Budget",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  o         Toggle current/optimized scenario"),
        Line::from("  e         Export state to JSON"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  L         Sign out"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 46u16.min(area.width.saturating_sub(4));
    let help_height = 23u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_pads_and_truncates() {
        assert_eq!(sparkline_string(&[], 4), "    ");
        assert_eq!(sparkline_string(&[0, 7], 4), "  ▁█");
        // Longer than the window: keep the most recent values.
        assert_eq!(sparkline_string(&[0, 1, 2, 3, 4, 5], 3), "▄▅▆");
    }
}
