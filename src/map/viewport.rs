//! Visible extent of the map and conversion between map and screen cells.

use crate::projection::Bounds;
use ratatui::layout::Rect;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Pan/zoom state over projected coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Extent shown on reset.
    home: Bounds,
    /// Centre of the view.
    center: (f64, f64),
    /// Zoom relative to the home extent (1.0 = fit).
    zoom: f64,
}

impl Viewport {
    /// Create a viewport showing `home`.
    pub fn new(home: Bounds) -> Self {
        Self {
            home,
            center: home.center(),
            zoom: 1.0,
        }
    }

    /// Back to the home extent.
    pub fn reset(&mut self) {
        self.center = self.home.center();
        self.zoom = 1.0;
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current centre.
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Projected units per terminal column for an area of `cols`×`rows` cells.
    fn scale(&self, cols: u16, rows: u16) -> f64 {
        let cols = f64::from(cols.max(1));
        let rows = f64::from(rows.max(1));
        let fit = (self.home.width() / cols).max(self.home.height() / (rows * CELL_ASPECT));
        fit / self.zoom
    }

    /// Extent visible in an area of `cols`×`rows` cells, keeping an equal
    /// scale on both axes.
    pub fn visible_bounds(&self, cols: u16, rows: u16) -> Bounds {
        let scale = self.scale(cols, rows);
        let half_w = f64::from(cols.max(1)) * scale / 2.0;
        let half_h = f64::from(rows.max(1)) * CELL_ASPECT * scale / 2.0;
        Bounds {
            min_x: self.center.0 - half_w,
            min_y: self.center.1 - half_h,
            max_x: self.center.0 + half_w,
            max_y: self.center.1 + half_h,
        }
    }

    /// Move the centre by a fraction of the visible extent.
    pub fn pan(&mut self, fx: f64, fy: f64, cols: u16, rows: u16) {
        let visible = self.visible_bounds(cols, rows);
        self.center.0 += visible.width() * fx;
        self.center.1 += visible.height() * fy;
    }

    /// Zoom about the centre.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor > 0.0 && factor.is_finite() {
            self.zoom *= factor;
        }
    }

    /// Zoom keeping the projected point `(x, y)` fixed on screen.
    pub fn zoom_at(&mut self, factor: f64, x: f64, y: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            return;
        }
        self.center.0 = x + (self.center.0 - x) / factor;
        self.center.1 = y + (self.center.1 - y) / factor;
        self.zoom *= factor;
    }

    /// Screen cell of a projected point, placed the way canvas labels are.
    ///
    /// Returns `None` when the point is outside the visible extent.
    pub fn cell_of(&self, area: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let b = self.visible_bounds(area.width, area.height);
        if !b.contains(x, y) {
            return None;
        }
        let col = ((x - b.min_x) * f64::from(area.width - 1) / b.width()) as u16;
        let row = ((b.max_y - y) * f64::from(area.height - 1) / b.height()) as u16;
        Some((area.x + col, area.y + row))
    }

    /// Projected point under a screen cell.
    pub fn point_at(&self, area: Rect, col: u16, row: u16) -> (f64, f64) {
        let b = self.visible_bounds(area.width, area.height);
        let rel_x = f64::from(col.saturating_sub(area.x)) / f64::from(area.width.saturating_sub(1).max(1));
        let rel_y = f64::from(row.saturating_sub(area.y)) / f64::from(area.height.saturating_sub(1).max(1));
        (b.min_x + rel_x * b.width(), b.max_y - rel_y * b.height())
    }
}
