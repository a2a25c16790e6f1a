//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Badge;

/// The corporate accent, a copper orange.
const ACCENT: Color = Color::Rgb(217, 120, 40);

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Corporate accent for highlights and the verdict card.
    pub accent: Color,
    /// Color for warning-grade values.
    pub warning: Color,
    /// Color for alarm-grade values.
    pub critical: Color,
    /// Color for nominal values.
    pub healthy: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            accent: ACCENT,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            border: Color::Gray,
            header: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            accent: ACCENT,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            border: Color::DarkGray,
            header: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a `--theme` flag value.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::auto_detect(),
        }
    }

    /// Style for a sensor value that may be in the alarm band.
    pub fn alert_style(&self, alert: bool) -> Style {
        if alert {
            Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.healthy)
        }
    }

    /// Style for a gallery badge.
    pub fn badge_style(&self, badge: Badge) -> Style {
        match badge {
            Badge::Live => Style::default().fg(self.critical).add_modifier(Modifier::BOLD),
            Badge::Rec => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for a signed budget movement: savings read green, new spend red.
    pub fn variation_style(&self, variation: i64) -> Style {
        if variation < 0 {
            Style::default().fg(self.healthy)
        } else if variation > 0 {
            Style::default().fg(self.critical)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}
