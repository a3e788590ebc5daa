//! Terminal UI rendering using ratatui.
//!
//! Rendering only reads from [`App`]; every state change goes through the
//! app's command methods in `events`.
//!
//! ## Submodules
//!
//! - [`sidebar`]: Group list with expandable metric names
//! - [`dashboard`]: Metric cards and recent activity for the selected group
//! - [`form`]: Modal overlay for creating a new group
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Header (common::render_header)           │
//! ├────────────┬─────────────────────────────┤
//! │ Sidebar    │ Dashboard                   │
//! │ (sidebar:: │ (dashboard::render)         │
//! │  render)   │                             │
//! ├────────────┴─────────────────────────────┤
//! │ Status Bar (common::render_status_bar)   │
//! └──────────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - form::render_overlay
//!    - common::render_help
//! ```

pub mod common;
pub mod dashboard;
pub mod form;
pub mod sidebar;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 60;
/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 12;
/// Width of the sidebar column, borders included.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Render one full frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.error));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5);
        frame.render_widget(paragraph, centered.intersection(area));
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    common::render_header(frame, app, chunks[0]);
    sidebar::render(frame, app, columns[0]);
    dashboard::render(frame, app, columns[1]);
    common::render_status_bar(frame, app, chunks[2]);

    if app.show_create_form {
        form::render_overlay(frame, app, area);
    }

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GroupForm, StaticMetricResolver};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        App::new(Box::new(StaticMetricResolver::new()), Theme::dark())
    }

    #[test]
    fn test_draw_dashboard() {
        let mut app = app();
        let screen = render_to_string(&mut app, 120, 40);

        assert!(screen.contains("Performance Metrics"));
        assert!(screen.contains("Response Time"));
        assert!(screen.contains("245ms"));
        assert!(screen.contains("User Engagement"));
        assert!(screen.contains("Recent Activity"));
    }

    #[test]
    fn test_draw_selected_group() {
        let mut app = app();
        app.select_group("business-metrics").unwrap();
        let screen = render_to_string(&mut app, 120, 40);

        assert!(screen.contains("$47,892"));
        assert!(screen.contains("Customer Acquisition"));
    }

    #[test]
    fn test_draw_create_form() {
        let mut app = app();
        app.open_create_form();
        let screen = render_to_string(&mut app, 120, 40);

        assert!(screen.contains("Add New Measurement Group"));
        assert!(screen.contains("Group Name"));
        assert!(screen.contains("1 minute"));
    }

    #[test]
    fn test_draw_create_form_on_wide_terminal() {
        let mut app = app();
        app.open_create_form();
        let screen = render_to_string(&mut app, 1000, 30);
        assert!(screen.contains("Add New Measurement Group"));
    }

    #[test]
    fn test_sidebar_scrolls_to_cursor() {
        let mut app = app();
        let forms: Vec<GroupForm> = (1..=20)
            .map(|i| GroupForm {
                name: format!("Group {i}"),
                ..GroupForm::default()
            })
            .collect();
        app.add_groups(&forms);
        app.select_last();

        let screen = render_to_string(&mut app, 80, 14);
        assert!(screen.contains("Group 20"));
        assert!(app.sidebar_state.offset() > 0);
    }

    #[test]
    fn test_draw_too_small() {
        let mut app = app();
        let screen = render_to_string(&mut app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }
}
