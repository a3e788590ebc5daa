use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, SidebarRow};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // The create form captures all keys while open
    if app.show_create_form {
        handle_form_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Selection and expansion
        KeyCode::Enter => app.activate_cursor(),
        KeyCode::Char(' ') => app.toggle_cursor(),
        KeyCode::Right | KeyCode::Char('l') => app.set_cursor_expanded(true),
        KeyCode::Left | KeyCode::Char('h') => app.set_cursor_expanded(false),

        // Create form
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_create_form(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the create form is open
fn handle_form_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_create_form(),

        // Submit; errors are shown inside the form
        KeyCode::Enter => {
            let _ = app.request_create_group();
        }

        // Field focus
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.form_prev_field(),
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),

        // Selector fields
        KeyCode::Right if app.form_field.is_selector() => app.form_cycle(true),
        KeyCode::Left if app.form_field.is_selector() => app.form_cycle(false),
        KeyCode::Char(' ') if app.form_field.is_selector() => app.form_cycle(true),

        // Text fields
        KeyCode::Backspace => app.form_pop(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.form_push(c),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.show_help || app.show_create_form {
        return;
    }

    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        // Click a group header to select it
        MouseEventKind::Down(MouseButton::Left) => {
            match app.sidebar_row_at(mouse.column, mouse.row) {
                Some(SidebarRow::Group(index)) => {
                    app.cursor = index;
                    app.activate_cursor();
                }
                Some(SidebarRow::Metric { group, .. }) => app.cursor = group,
                None => {}
            }
        }

        // Right-click toggles the group under the cursor
        MouseEventKind::Down(MouseButton::Right) => app.toggle_cursor(),

        _ => {}
    }
}
