//! Category table UI rendering.

use super::TableState;
use crate::config::{IconTable, PriorityNames, TableConfig};
use crate::data::Category;
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Everything the table needs besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct TableContext<'a> {
    /// Category table.
    pub categories: &'a [Category],
    /// Priority display names.
    pub names: &'a PriorityNames,
    /// Marker glyphs.
    pub icons: &'a IconTable,
    /// Column widths.
    pub config: &'a TableConfig,
}

/// Draw the category table.
pub fn draw_table(
    f: &mut Frame<'_>,
    state: &TableState,
    ctx: TableContext<'_>,
    area: Rect,
    focused: bool,
    colors: &ThemeColors,
) {
    let rows = state.rows(ctx.categories, ctx.names, ctx.icons);
    let total = rows.len();
    // Borders and header.
    let viewport_height = area.height.saturating_sub(3) as usize;
    let category_width = category_column_width(area.width, ctx.config);

    let body: Vec<Row<'_>> = rows
        .into_iter()
        .skip(state.scroll)
        .take(viewport_height)
        .map(|row| {
            Row::new(vec![
                Cell::from(format!(" {}", row.glyph)).style(Style::default().fg(colors.label)),
                Cell::from(truncate(&row.category, category_width)),
                Cell::from(row.priority),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Icon"),
        Cell::from("Category"),
        Cell::from("Priority"),
    ])
    .style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(ctx.config.icon_width),
        Constraint::Length(category_width as u16),
        Constraint::Length(ctx.config.priority_width),
    ];

    let border = if focused {
        colors.focus_border
    } else {
        colors.border
    };

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" Categories ({}/{}) ", total, ctx.categories.len()))
                .title_style(Style::default().fg(colors.heading))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(table, area);

    if total > viewport_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(viewport_height)).position(state.scroll);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

/// Width the layout gives the category column: whatever the borders, the
/// fixed columns and the column gaps leave, but at least the configured width.
fn category_column_width(area_width: u16, config: &TableConfig) -> usize {
    // Two borders and two one-cell gaps between three columns.
    let fixed = 2 + config.icon_width + config.priority_width + 2;
    area_width
        .saturating_sub(fixed)
        .max(config.category_width) as usize
}

/// Cut a string to `max` display columns, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Hospital", 18), "Hospital");
        assert_eq!(truncate("Bolnica i dom zdravlja", 8), "Bolnica…");
    }

    #[test]
    fn category_column_uses_the_room_it_gets() {
        let config = TableConfig::default();
        // 40 columns: 2 borders, icon 4, priority 8 and 2 gaps leave 24.
        assert_eq!(category_column_width(40, &config), 24);
        assert_eq!(truncate("Bolnica i dom zdravlja", 24), "Bolnica i dom zdravlja");
        assert_eq!(
            category_column_width(10, &config),
            config.category_width as usize
        );
    }

    #[test]
    fn wide_table_shows_long_names_in_full() {
        use crate::config::{IconTable, PriorityNames};
        use crate::data::{Category, Priority};
        use crate::filter::FilterView;
        use ratatui::{backend::TestBackend, Terminal};

        let categories = vec![Category {
            category: "Bolnica i dom zdravlja".to_string(),
            icon: "hospital".to_string(),
            priority: Priority(10),
        }];
        let mut state = TableState::new();
        state.apply(&FilterView {
            table_mask: vec![true],
            visible_groups: vec![Priority(10)],
        });
        let names = PriorityNames::default();
        let icons = IconTable::default();
        let config = TableConfig::default();
        let ctx = TableContext {
            categories: &categories,
            names: &names,
            icons: &icons,
            config: &config,
        };
        let colors = ThemeColors::from_theme(&crate::app::Theme::GruvboxDark);

        let mut terminal = Terminal::new(TestBackend::new(44, 6)).unwrap();
        terminal
            .draw(|f| draw_table(f, &state, ctx, f.area(), false, &colors))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("Bolnica i dom zdravlja"));
        assert!(!screen.contains('…'));
    }
}
