//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::config::ThemeChoice;
use crate::data::ChangeDirection;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for increasing readings.
    pub increase: Color,
    /// Color for decreasing readings.
    pub decrease: Color,
    /// Color for flat readings and secondary text.
    pub muted: Color,
    /// Color for validation errors.
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for titles and section headers.
    pub header: Style,
    /// Style for the row under the cursor.
    pub selected: Style,
    /// Style for the selected group's name.
    pub active_group: Style,
    /// Style for the focused form field.
    pub field_focused: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            increase: Color::Green,
            decrease: Color::Red,
            muted: Color::Gray,
            error: Color::LightRed,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            active_group: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            field_focused: Style::default().fg(Color::Black).bg(Color::Cyan),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            increase: Color::Green,
            decrease: Color::Red,
            muted: Color::DarkGray,
            error: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            active_group: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            field_focused: Style::default().fg(Color::White).bg(Color::Blue),
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

    /// Resolve a configured choice into a concrete theme.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Get style for a reading's trend
    pub fn direction_style(&self, direction: ChangeDirection) -> Style {
        match direction {
            ChangeDirection::Increase => Style::default().fg(self.increase),
            ChangeDirection::Decrease => Style::default().fg(self.decrease),
            ChangeDirection::Neutral => Style::default().fg(self.muted),
        }
    }
}
