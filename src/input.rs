//! Keyboard and mouse handling.

use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Rows moved by Ctrl-d / Ctrl-u in the table.
const PAGE: usize = 10;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Apply a key press.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // Keys shared by both panels
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => return Action::Quit,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Action::Quit,
        (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
            app.toggle_nth(c as usize - '1' as usize);
            return Action::Continue;
        },
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.cycle_focus();
            return Action::Continue;
        },
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
            app.cycle_theme();
            return Action::Continue;
        },
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            app.copy_hovered();
            return Action::Continue;
        },
        (KeyModifiers::NONE, KeyCode::Esc) => {
            app.map.cursor = None;
            app.map.update_hover();
            app.error_message = None;
            return Action::Continue;
        },
        _ => {},
    }

    match app.focus {
        Focus::Map => handle_map_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
    Action::Continue
}

fn handle_map_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Pan
        (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            app.map.pan(-1, 0)
        },
        (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.map.pan(1, 0)
        },
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.map.pan(0, 1)
        },
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.map.pan(0, -1)
        },

        // Hover cursor
        (KeyModifiers::SHIFT, KeyCode::Char('H')) | (KeyModifiers::SHIFT, KeyCode::Left) => {
            app.map.move_cursor(-1, 0)
        },
        (KeyModifiers::SHIFT, KeyCode::Char('L')) | (KeyModifiers::SHIFT, KeyCode::Right) => {
            app.map.move_cursor(1, 0)
        },
        (KeyModifiers::SHIFT, KeyCode::Char('K')) | (KeyModifiers::SHIFT, KeyCode::Up) => {
            app.map.move_cursor(0, -1)
        },
        (KeyModifiers::SHIFT, KeyCode::Char('J')) | (KeyModifiers::SHIFT, KeyCode::Down) => {
            app.map.move_cursor(0, 1)
        },

        // Zoom
        (_, KeyCode::Char('+')) | (KeyModifiers::NONE, KeyCode::Char('=')) => app.map.zoom_in(),
        (KeyModifiers::NONE, KeyCode::Char('-')) => app.map.zoom_out(),
        (KeyModifiers::NONE, KeyCode::Char('0')) => {
            app.map.reset();
            app.status = "View reset".to_string();
        },

        // Tools
        (KeyModifiers::NONE, KeyCode::Char('s')) => app.export(),
        _ => {},
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.table.scroll_up(1)
        },
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.table.scroll_down(1)
        },
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.table.scroll_up(PAGE),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.table.scroll_down(PAGE),
        (KeyModifiers::NONE, KeyCode::Char('g')) | (KeyModifiers::NONE, KeyCode::Home) => {
            app.table.scroll_top()
        },
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            app.table.scroll_bottom()
        },
        _ => {},
    }
}

/// Apply a mouse event: hover on move, toggle/focus on click, zoom or scroll
/// on the wheel.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);
    let over_map = app
        .map
        .area
        .is_some_and(|a| a.contains(Position::new(col, row)));

    match mouse.kind {
        MouseEventKind::Moved => app.map.set_cursor(col, row),
        MouseEventKind::Down(MouseButton::Left) => app.click(col, row),
        MouseEventKind::ScrollUp if over_map => app.map.wheel_zoom(col, row, true),
        MouseEventKind::ScrollDown if over_map => app.map.wheel_zoom(col, row, false),
        MouseEventKind::ScrollUp => app.table.scroll_up(1),
        MouseEventKind::ScrollDown => app.table.scroll_down(1),
        _ => {},
    }
}
