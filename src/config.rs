//! Configuration defaults for the map, the table and the priority toggles.

use std::collections::BTreeMap;

use crate::data::Priority;

/// Configuration for the map figure.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Figure title.
    pub title: String,
    /// Logical figure width, used to split the screen against the table.
    pub width: u16,
    /// Logical figure height.
    pub height: u16,
    /// Half-width of a marker hit box, in terminal columns.
    pub hit_cols: u16,
    /// Half-height of a marker hit box, in terminal rows.
    pub hit_rows: u16,
    /// Fraction of the visible extent moved per pan step.
    pub pan_step: f64,
    /// Zoom factor applied per zoom step.
    pub zoom_step: f64,
    /// Padding around the data bounds on reset (0.05 = 5%).
    pub padding: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "BiH".to_string(),
            width: 800,
            height: 800,
            hit_cols: 1,
            hit_rows: 1,
            pan_step: 0.1,
            zoom_step: 1.25,
            padding: 0.05,
        }
    }
}

/// Configuration for the category table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Logical width of the controls column (same units as [`MapConfig::width`]).
    pub width: u16,
    /// Icon column width in characters.
    pub icon_width: u16,
    /// Category column width in characters.
    pub category_width: u16,
    /// Priority column width in characters.
    pub priority_width: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 300,
            icon_width: 4,
            category_width: 14,
            priority_width: 8,
        }
    }
}

/// Display names for priorities.
#[derive(Debug, Clone)]
pub struct PriorityNames {
    names: BTreeMap<Priority, String>,
}

impl PriorityNames {
    /// Display name for a priority, `Priority <n>` when unnamed.
    pub fn name(&self, priority: Priority) -> String {
        self.names
            .get(&priority)
            .cloned()
            .unwrap_or_else(|| format!("Priority {}", priority.0))
    }

    /// Register or replace a name.
    pub fn insert(&mut self, priority: Priority, name: impl Into<String>) {
        self.names.insert(priority, name.into());
    }

    /// Parse a `priority=name` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Option<(Priority, String)> {
        let (priority, name) = pair.split_once('=')?;
        let priority = priority.trim().parse().ok()?;
        let name = name.trim();
        (!name.is_empty()).then(|| (Priority(priority), name.to_string()))
    }
}

impl Default for PriorityNames {
    fn default() -> Self {
        let names = [(10, "High"), (20, "Medium"), (30, "Low")]
            .into_iter()
            .map(|(p, n)| (Priority(p), n.to_string()))
            .collect();
        Self { names }
    }
}

/// Marker glyphs keyed by category icon name.
#[derive(Debug, Clone, Default)]
pub struct IconTable {
    glyphs: BTreeMap<String, char>,
}

impl IconTable {
    /// Register a glyph for an icon name.
    pub fn insert(&mut self, icon: impl Into<String>, glyph: char) {
        self.glyphs.insert(icon.into(), glyph);
    }

    /// Glyph for an icon name.
    ///
    /// Falls back to the upper-cased first letter of the name, or `●` when the
    /// name is empty.
    pub fn glyph(&self, icon: &str) -> char {
        if let Some(&glyph) = self.glyphs.get(icon) {
            return glyph;
        }
        icon.chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('●')
    }

    /// Parse a `name=glyph` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Option<(String, char)> {
        let (name, glyph) = pair.split_once('=')?;
        let mut chars = glyph.chars();
        let glyph = chars.next()?;
        if chars.next().is_some() || name.is_empty() {
            return None;
        }
        Some((name.to_string(), glyph))
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Map figure settings.
    pub map: MapConfig,
    /// Table settings.
    pub table: TableConfig,
    /// Priority display names.
    pub priority_names: PriorityNames,
    /// Marker glyphs.
    pub icons: IconTable,
    /// Start with every priority toggle active.
    pub show_all: bool,
}

/// Window title of the application.
pub const DOCUMENT_TITLE: &str = "Bosnia and Herzegovina";

/// Default export target for the save tool.
pub const DEFAULT_EXPORT_FILE: &str = "bih_export.geojson";
