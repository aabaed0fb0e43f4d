//! Priority toggle bar rendering.

use super::PriorityFilter;
use crate::config::PriorityNames;
use crate::data::Priority;
use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HEADER: &str = "Choose Priority:";

/// Draw the header and one button per priority.
///
/// Returns the screen area of every button so clicks can be mapped back to
/// priorities.
pub fn draw_toggles(
    f: &mut Frame<'_>,
    filter: &PriorityFilter,
    names: &PriorityNames,
    area: Rect,
    colors: &ThemeColors,
) -> Vec<(Priority, Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);

    let header = Line::from(Span::styled(
        HEADER,
        Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
    ));

    // Buttons go on the line below the header.
    let row = inner.y + 1;
    let right = inner.x + inner.width;
    let mut spans = Vec::new();
    let mut buttons = Vec::new();
    let mut x = inner.x;

    for (i, &priority) in filter.priorities().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, names.name(priority));
        let width = label.width() as u16;

        let style = if filter.is_active(priority) {
            Style::default()
                .fg(colors.bg)
                .bg(colors.toggle_on)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text).bg(colors.toggle_off)
        };

        let end = x.saturating_add(width).min(right);
        if end > x && row < inner.y + inner.height {
            buttons.push((priority, Rect::new(x, row, end - x, 1)));
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }

    let text = vec![header, Line::from(spans)];
    f.render_widget(Paragraph::new(text).block(block), area);
    buttons
}
