//! User interface rendering.
//!
//! The map takes the left side; the priority toggles and the category table
//! share the right column, sized against the map by their logical widths.

use crate::app::{App, Focus};
use crate::filter::ui::draw_toggles;
use crate::map::ui::draw_map;
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use crate::table::ui::{draw_table, TableContext};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Height of the toggle bar including borders.
const TOGGLE_BAR_HEIGHT: u16 = 4;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let map_width = u32::from(app.config.map.width);
    let controls_width = u32::from(app.config.table.width);
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(map_width, map_width + controls_width),
            Constraint::Ratio(controls_width, map_width + controls_width),
        ])
        .split(chunks[0]);

    draw_map(f, &mut app.map, content[0], app.focus == Focus::Map, &colors);

    let controls = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOGGLE_BAR_HEIGHT), Constraint::Min(0)])
        .split(content[1]);

    app.toggle_areas = draw_toggles(
        f,
        &app.filter,
        &app.config.priority_names,
        controls[0],
        &colors,
    );

    let ctx = TableContext {
        categories: &app.data.categories,
        names: &app.config.priority_names,
        icons: &app.config.icons,
        config: &app.config.table,
    };
    draw_table(
        f,
        &app.table,
        ctx,
        controls[1],
        app.focus == Focus::Table,
        &colors,
    );

    draw_status(
        f,
        chunks[1],
        &app.status_line(),
        app.error_message.as_deref(),
        &colors,
    );
    draw_keymap(f, chunks[2], app.focus, &colors);
}
