//! Keymap help bar UI component.

use crate::app::Focus;
use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, focus: Focus, colors: &ThemeColors) {
    let keymap_text = match focus {
        Focus::Map => {
            "q:quit | 1-9:priority | hjkl:pan | HJKL:cursor | +-:zoom | 0:reset | s:save | y:copy | Tab:table | T:theme"
        },
        Focus::Table => "q:quit | 1-9:priority | jk:scroll | g/G:top/bottom | y:copy | Tab:map | T:theme",
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
