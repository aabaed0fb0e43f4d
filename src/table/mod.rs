//! Category table feature - one row per category, filtered by priority.

pub mod ui;

use crate::config::{IconTable, PriorityNames};
use crate::data::Category;
use crate::filter::FilterView;

/// One displayed table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Icon glyph.
    pub glyph: char,
    /// Category name.
    pub category: String,
    /// Priority display name.
    pub priority: String,
}

/// Table state: current filter mask and scroll offset.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Per-category visibility from the last filter update.
    pub mask: Vec<bool>,
    /// First visible row.
    pub scroll: usize,
}

impl TableState {
    /// Create an empty table state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the mask of a filter update, keeping the scroll in range.
    pub fn apply(&mut self, view: &FilterView) {
        self.mask = view.table_mask.clone();
        let rows = view.visible_rows();
        if self.scroll >= rows {
            self.scroll = rows.saturating_sub(1);
        }
    }

    /// Indices of categories passing the mask.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &shown)| shown)
            .map(|(i, _)| i)
            .collect()
    }

    /// Rows passing the mask, in category table order.
    pub fn rows(
        &self,
        categories: &[Category],
        names: &PriorityNames,
        icons: &IconTable,
    ) -> Vec<TableRow> {
        self.visible_indices()
            .into_iter()
            .filter_map(|i| categories.get(i))
            .map(|c| TableRow {
                glyph: icons.glyph(&c.icon),
                category: c.category.clone(),
                priority: names.name(c.priority),
            })
            .collect()
    }

    /// Scroll up by `n` rows.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Scroll down by `n` rows, stopping at the last row.
    pub fn scroll_down(&mut self, n: usize) {
        let last = self.visible_indices().len().saturating_sub(1);
        self.scroll = (self.scroll + n).min(last);
    }

    /// Jump to the first row.
    pub fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump to the last row.
    pub fn scroll_bottom(&mut self) {
        self.scroll = self.visible_indices().len().saturating_sub(1);
    }
}
