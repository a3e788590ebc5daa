//! Dashboard rendering.
//!
//! Shows the selected group's title, one card per metric reading, and the
//! recent activity feed.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::MetricReading;

/// Cards per row.
const CARD_COLUMNS: usize = 3;
/// Height of a metric card, borders included.
const CARD_HEIGHT: u16 = 5;

/// Render the dashboard for the selected group.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let readings = app.selected_metrics();
    let card_rows = readings.len().div_ceil(CARD_COLUMNS).max(1) as u16;

    let chunks = Layout::vertical([
        Constraint::Length(3),                      // Title
        Constraint::Length(card_rows * CARD_HEIGHT), // Cards
        Constraint::Min(4),                         // Recent activity
    ])
    .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", app.selected_title()), app.theme.header)),
        Line::from(Span::styled(
            " Monitor your key performance indicators",
            Style::default().fg(app.theme.muted),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); card_rows as usize])
        .split(chunks[1]);
    for (row_area, row_readings) in rows.iter().zip(readings.chunks(CARD_COLUMNS)) {
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
                .split(*row_area);
        for (card_area, reading) in columns.iter().zip(row_readings) {
            render_card(frame, app, reading, *card_area);
        }
    }

    render_activity(frame, app, chunks[2]);
}

fn render_card(frame: &mut Frame, app: &App, reading: &MetricReading, area: Rect) {
    let trend_style = app.theme.direction_style(reading.change_direction);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", reading.value),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {} ", reading.change_direction.symbol()), trend_style),
            Span::styled(reading.change_magnitude.clone(), trend_style),
            Span::styled(" from last month", Style::default().fg(app.theme.muted)),
        ]),
    ];

    let block = Block::default()
        .title(format!(" {} ", reading.title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for entry in app.recent_activity() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}", entry.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", entry.age), Style::default().fg(app.theme.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.detail),
            Style::default().fg(app.theme.muted),
        )));
    }

    let block = Block::default()
        .title(" Recent Activity ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
