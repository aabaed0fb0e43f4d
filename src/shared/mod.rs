//! Widgets and palettes used by both the map and the controls column.
//!
//! The palette colours the outlines, markers and toggles as well as the
//! chrome; the status and keymap bars sit below both panels.

mod keymap_bar;
mod status_bar;
mod theme;

pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;
