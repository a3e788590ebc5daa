//! Common UI components shared across views.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the header bar.
///
/// Displays: app name, group count, and the selected group.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .selected_group_id()
        .and_then(|id| app.store().get(id))
        .map(|g| g.name().to_string())
        .unwrap_or_else(|| "none".to_string());

    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(app.theme.highlight)),
        Span::styled("DASHBOARD ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.groups().len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" measurement groups │ selected: "),
        Span::styled(selected, app.theme.active_group),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows available controls, or a temporary message when one is pending.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.increase));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.show_create_form {
        " Tab:next field ←/→:change option Enter:create Esc:cancel"
    } else {
        " ↑↓:move Enter:select Space:expand a:add group ?:help q:quit"
    };

    let paragraph = Paragraph::new(controls).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Groups"),
        Line::from("  ↑/↓ j/k     Move cursor"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       Select group"),
        Line::from("  Space       Expand/collapse"),
        Line::from("  →/←  l/h    Expand/collapse"),
        Line::from(""),
        section(" Create form"),
        Line::from("  a         Open form"),
        Line::from("  Tab       Next field"),
        Line::from("  ←/→       Change icon/interval"),
        Line::from("  Enter     Create group"),
        Line::from("  Esc       Cancel"),
        Line::from(""),
        section(" General"),
        Line::from("  ?         Toggle help"),
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
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
