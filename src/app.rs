//! Application state and logic.

use std::path::PathBuf;

use crate::config::{Config, DEFAULT_EXPORT_FILE};
use crate::data::{MapData, Priority};
use crate::error::Result;
use crate::export::export_visible;
use crate::filter::{update_filter, FilterView, PriorityFilter};
use crate::map::MapView;
use crate::table::TableState;
use crate::util::copy_marker_info;
use ratatui::layout::{Position, Rect};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Panel receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The map figure.
    Map,
    /// The category table.
    Table,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded data.
    pub data: MapData,
    /// Configuration.
    pub config: Config,
    /// Priority toggles.
    pub filter: PriorityFilter,
    /// Result of the last filter update.
    pub view: FilterView,
    /// Map state.
    pub map: MapView,
    /// Table state.
    pub table: TableState,
    /// Focused panel.
    pub focus: Focus,
    /// Status message.
    pub status: String,
    /// Error message.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
    /// Toggle button areas of the last draw.
    pub toggle_areas: Vec<(Priority, Rect)>,
    /// Save tool target.
    pub export_path: PathBuf,
}

impl App {
    /// Create the application and run the initial filter update.
    pub fn new(data: MapData, config: Config, export_path: Option<PathBuf>) -> Result<Self> {
        let filter = PriorityFilter::new(&data.priorities, config.show_all);
        let map = MapView::new(&data, &config.map, &config.icons)?;

        let mut app = Self {
            status: format!(
                "Loaded {} points of interest in {} categories",
                data.entries.len(),
                data.categories.len()
            ),
            data,
            config,
            filter,
            view: FilterView::default(),
            map,
            table: TableState::new(),
            focus: Focus::Map,
            error_message: None,
            theme: Theme::GruvboxDark,
            toggle_areas: Vec::new(),
            export_path: export_path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
        };
        app.update_filter();
        Ok(app)
    }

    /// Recompute table rows and marker visibility from the toggles.
    pub fn update_filter(&mut self) {
        self.view = update_filter(&self.filter, &self.data.categories, &mut self.map.groups);
        self.table.apply(&self.view);
        self.map.update_hover();
    }

    /// Flip one priority toggle.
    pub fn toggle_priority(&mut self, priority: Priority) {
        if let Some(active) = self.filter.toggle(priority) {
            self.update_filter();
            self.status = format!(
                "{}: {}",
                self.config.priority_names.name(priority),
                if active { "ON" } else { "OFF" }
            );
        }
    }

    /// Flip the toggle at a position in toggle order.
    pub fn toggle_nth(&mut self, index: usize) {
        match self.filter.priorities().get(index).copied() {
            Some(priority) => self.toggle_priority(priority),
            None => self.status = format!("No priority toggle {}", index + 1),
        }
    }

    /// Handle a left click; toggles the button under it.
    pub fn click(&mut self, col: u16, row: u16) {
        let hit = self
            .toggle_areas
            .iter()
            .find(|(_, area)| area.contains(Position::new(col, row)))
            .map(|(priority, _)| *priority);
        if let Some(priority) = hit {
            self.toggle_priority(priority);
            return;
        }

        if let Some(area) = self.map.area {
            if area.contains(Position::new(col, row)) {
                self.focus = Focus::Map;
                self.map.set_cursor(col, row);
            }
        }
    }

    /// Switch focus between map and table.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Map => Focus::Table,
            Focus::Table => Focus::Map,
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Save the visible markers as GeoJSON.
    pub fn export(&mut self) {
        match export_visible(&self.map, &self.config.priority_names, &self.export_path) {
            Ok(count) => {
                self.status = format!("Saved {} markers to {}", count, self.export_path.display());
                self.error_message = None;
            },
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.error_message = Some(format!("Save failed: {}", e));
            },
        }
    }

    /// Copy the hovered point of interest to the clipboard.
    pub fn copy_hovered(&mut self) {
        let Some((priority, marker)) = self.map.hovered_marker() else {
            self.status = "No marker under cursor".to_string();
            return;
        };
        let name = self.config.priority_names.name(priority);
        match copy_marker_info(marker, &name, priority) {
            Ok(()) => self.status = format!("Copied {}!", marker.name),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Status line, including the hovered marker if any.
    pub fn status_line(&self) -> String {
        match self.map.hovered_marker() {
            Some((priority, marker)) => format!(
                "{} | {} ({})",
                marker.name,
                marker.category,
                self.config.priority_names.name(priority)
            ),
            None => self.status.clone(),
        }
    }
}
