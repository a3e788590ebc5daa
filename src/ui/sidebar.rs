//! Sidebar rendering.
//!
//! Lists the measurement groups in store order. Expanded groups show their
//! metric names indented below the header row.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, SidebarRow};

/// Render the group list with the cursor highlighted.
///
/// The list state lives in the app so the scroll offset survives between
/// frames and mouse clicks can be mapped back to rows.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let groups = app.groups();
    let rows = app.sidebar_rows();
    let selected_id = app.selected_group_id();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match *row {
            SidebarRow::Group(index) => {
                let group = &groups[index];
                let chevron = if group.is_expanded() { "▾" } else { "▸" };
                let name_style = if selected_id == Some(group.id()) {
                    app.theme.active_group
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", chevron),
                        Style::default().fg(app.theme.muted),
                    ),
                    Span::raw(format!("{} ", group.icon().symbol())),
                    Span::styled(group.name().to_string(), name_style),
                ]))
            }
            SidebarRow::Metric { group, metric } => {
                let name = &groups[group].metrics()[metric];
                ListItem::new(Line::from(Span::styled(
                    format!("    {}", name),
                    Style::default().fg(app.theme.muted).add_modifier(Modifier::DIM),
                )))
            }
        })
        .collect();

    let cursor_row = rows.iter().position(|row| *row == SidebarRow::Group(app.cursor));

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Measurement Groups ")
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(app.theme.selected);

    app.sidebar_area = area;
    app.sidebar_state.select(cursor_row);
    frame.render_stateful_widget(list, area, &mut app.sidebar_state);
}
