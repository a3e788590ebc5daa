//! Create-group form overlay.
//!
//! Displays the form draft as a modal with one line per field. Text fields
//! show their current input (or a placeholder); selector fields show the
//! chosen option between arrows.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, FormField};
use crate::data::{GroupIcon, RefreshInterval};

/// Minimum width required for the form overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
/// Width of the label column.
const LABEL_WIDTH: usize = 27;

/// Render the create-group form as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    if area.width < MIN_OVERLAY_WIDTH {
        return;
    }

    let overlay_width = (area.width / 5 * 4).clamp(MIN_OVERLAY_WIDTH, 90);
    // Fields, blank line, error line, footer, borders
    let overlay_height = (FormField::ALL.len() as u16 + 5).min(area.height);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Add New Measurement Group ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Length(FormField::ALL.len() as u16), // Fields
        Constraint::Length(1),                           // Spacer
        Constraint::Length(1),                           // Error
        Constraint::Min(1),                              // Footer
    ])
    .split(inner);

    let lines: Vec<Line> = FormField::ALL.iter().map(|field| field_line(app, *field)).collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    if let Some(ref err) = app.form_error {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(error, chunks[2]);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " Enter: Create Group   Esc: Cancel",
        Style::default().add_modifier(Modifier::DIM),
    )));
    frame.render_widget(footer, chunks[3]);
}

fn field_line(app: &App, field: FormField) -> Line<'static> {
    let focused = app.form_field == field;
    let label_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.muted)
    };
    let label = Span::styled(
        format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
        label_style,
    );

    let value = app.form_value(field);
    let value_span = if field.is_selector() {
        let option = selector_label(field, value);
        let text = if focused {
            format!("◀ {} ▶", option)
        } else {
            format!("  {}  ", option)
        };
        Span::styled(text, value_style(app, focused))
    } else if value.is_empty() && !focused {
        Span::styled(
            field.placeholder().to_string(),
            Style::default().fg(app.theme.muted).add_modifier(Modifier::DIM),
        )
    } else if focused {
        Span::styled(format!("{}_", value), value_style(app, focused))
    } else {
        Span::raw(value.to_string())
    };

    Line::from(vec![label, value_span])
}

fn value_style(app: &App, focused: bool) -> Style {
    if focused {
        app.theme.field_focused
    } else {
        Style::default()
    }
}

fn selector_label(field: FormField, value: &str) -> String {
    match field {
        FormField::Icon => match value.parse::<GroupIcon>() {
            Ok(icon) => format!("{} {}", icon.symbol(), icon.label()),
            Err(_) => value.to_string(),
        },
        FormField::RefreshInterval => match value.parse::<RefreshInterval>() {
            Ok(interval) => interval.label().to_string(),
            Err(_) => value.to_string(),
        },
        _ => value.to_string(),
    }
}
