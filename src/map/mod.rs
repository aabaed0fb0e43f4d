//! Map feature - projected outlines, priority marker groups and hover.
//!
//! The map owns everything drawn on the canvas: the country outline, the
//! municipality outlines and one marker group per priority. The viewport
//! handles panning and zooming; hover finds the nearest visible marker under
//! the map cursor.

pub mod ui;
mod viewport;

pub use viewport::Viewport;

use crate::config::{IconTable, MapConfig};
use crate::data::{Entry, MapData, Priority};
use crate::error::Result;
use crate::projection::{Bounds, WebMercator};
use geo::MultiLineString;
use ratatui::layout::Rect;

/// One point of interest on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Display name.
    pub name: String,
    /// Category name.
    pub category: String,
    /// Icon name.
    pub icon: String,
    /// Glyph drawn for the icon.
    pub glyph: char,
    /// WGS84 longitude.
    pub longitude: f64,
    /// WGS84 latitude.
    pub latitude: f64,
    /// Web Mercator x.
    pub x: f64,
    /// Web Mercator y.
    pub y: f64,
}

/// All markers of one priority. Shown and hidden together.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGroup {
    /// Priority of every marker in the group.
    pub priority: Priority,
    /// Markers in data order.
    pub markers: Vec<Marker>,
    /// Whether the group is drawn and hoverable.
    pub visible: bool,
}

/// Build one marker group per priority, in the given priority order.
pub fn build_marker_groups(
    entries: &[Entry],
    priorities: &[Priority],
    icons: &IconTable,
    mercator: &WebMercator,
) -> Result<Vec<MarkerGroup>> {
    priorities
        .iter()
        .map(|&priority| {
            let markers = entries
                .iter()
                .filter(|e| e.priority == priority)
                .map(|e| {
                    let (x, y) = mercator.project(e.longitude, e.latitude)?;
                    Ok(Marker {
                        name: e.name.clone(),
                        category: e.category.clone(),
                        icon: e.icon.clone(),
                        glyph: icons.glyph(&e.icon),
                        longitude: e.longitude,
                        latitude: e.latitude,
                        x,
                        y,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MarkerGroup {
                priority,
                markers,
                visible: true,
            })
        })
        .collect()
}

/// Marker under the map cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    /// Index into the marker groups.
    pub group: usize,
    /// Index into the group's markers.
    pub marker: usize,
}

/// Nearest visible marker whose hit box contains `cursor`.
///
/// A marker's hit box spans `hit_cols` columns and `hit_rows` rows either side
/// of its cell. Distance weighs rows double since cells are tall.
pub fn hit_test(
    groups: &[MarkerGroup],
    viewport: &Viewport,
    area: Rect,
    cursor: (u16, u16),
    hit_cols: u16,
    hit_rows: u16,
) -> Option<HoverTarget> {
    let mut best: Option<(u32, HoverTarget)> = None;

    for (gi, group) in groups.iter().enumerate().filter(|(_, g)| g.visible) {
        for (mi, marker) in group.markers.iter().enumerate() {
            let Some((col, row)) = viewport.cell_of(area, marker.x, marker.y) else {
                continue;
            };
            let dc = col.abs_diff(cursor.0);
            let dr = row.abs_diff(cursor.1);
            if dc > hit_cols || dr > hit_rows {
                continue;
            }
            let dist = u32::from(dc).pow(2) + 4 * u32::from(dr).pow(2);
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, HoverTarget { group: gi, marker: mi }));
            }
        }
    }

    best.map(|(_, target)| target)
}

/// Map state: projected layers, marker groups, viewport and cursor.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Figure title.
    pub title: String,
    /// Country outline, projected.
    pub country: MultiLineString<f64>,
    /// Municipality outlines, projected.
    pub municipalities: Vec<MultiLineString<f64>>,
    /// Marker groups in priority order.
    pub groups: Vec<MarkerGroup>,
    /// Pan/zoom state.
    pub viewport: Viewport,
    /// Map cursor, absolute terminal cell.
    pub cursor: Option<(u16, u16)>,
    /// Canvas area of the last draw.
    pub area: Option<Rect>,
    /// Marker under the cursor.
    pub hovered: Option<HoverTarget>,
    config: MapConfig,
}

impl MapView {
    /// Project the loaded data and build the marker groups.
    pub fn new(data: &MapData, config: &MapConfig, icons: &IconTable) -> Result<Self> {
        let mercator = WebMercator::new()?;
        let country = mercator.project_lines(&data.country.lines)?;
        let municipalities = data
            .municipalities
            .iter()
            .map(|layer| mercator.project_lines(&layer.lines))
            .collect::<Result<Vec<_>>>()?;
        let groups = build_marker_groups(&data.entries, &data.priorities, icons, &mercator)?;

        let home = home_bounds(&country, &municipalities, &groups, &mercator)?.pad(config.padding);

        Ok(Self {
            title: config.title.clone(),
            country,
            municipalities,
            groups,
            viewport: Viewport::new(home),
            cursor: None,
            area: None,
            hovered: None,
            config: config.clone(),
        })
    }

    /// Canvas size used before the first draw.
    fn size(&self) -> (u16, u16) {
        self.area
            .map(|a| (a.width, a.height))
            .unwrap_or((self.config.width / 10, self.config.height / 20))
    }

    /// Pan by whole steps (positive is right/up).
    pub fn pan(&mut self, steps_x: i32, steps_y: i32) {
        let (cols, rows) = self.size();
        let step = self.config.pan_step;
        self.viewport
            .pan(f64::from(steps_x) * step, f64::from(steps_y) * step, cols, rows);
        self.update_hover();
    }

    /// Zoom in one step about the centre.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_by(self.config.zoom_step);
        self.update_hover();
    }

    /// Zoom out one step about the centre.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_by(1.0 / self.config.zoom_step);
        self.update_hover();
    }

    /// Wheel zoom centred on a screen cell.
    pub fn wheel_zoom(&mut self, col: u16, row: u16, zoom_in: bool) {
        let Some(area) = self.area else {
            return;
        };
        let factor = if zoom_in {
            self.config.zoom_step
        } else {
            1.0 / self.config.zoom_step
        };
        let (x, y) = self.viewport.point_at(area, col, row);
        self.viewport.zoom_at(factor, x, y);
        self.update_hover();
    }

    /// Back to the full extent.
    pub fn reset(&mut self) {
        self.viewport.reset();
        self.update_hover();
    }

    /// Place the cursor at a screen cell; outside the canvas clears it.
    pub fn set_cursor(&mut self, col: u16, row: u16) {
        self.cursor = self
            .area
            .filter(|a| a.contains(ratatui::layout::Position::new(col, row)))
            .map(|_| (col, row));
        self.update_hover();
    }

    /// Move the cursor by cells, starting from the canvas centre.
    pub fn move_cursor(&mut self, dc: i32, dr: i32) {
        let Some(area) = self.area else {
            return;
        };
        let (col, row) = self
            .cursor
            .unwrap_or((area.x + area.width / 2, area.y + area.height / 2));
        let max_col = i32::from(area.x + area.width.saturating_sub(1));
        let max_row = i32::from(area.y + area.height.saturating_sub(1));
        let col = (i32::from(col) + dc).clamp(i32::from(area.x), max_col);
        let row = (i32::from(row) + dr).clamp(i32::from(area.y), max_row);
        self.cursor = Some((col as u16, row as u16));
        self.update_hover();
    }

    /// Recompute the hovered marker.
    pub fn update_hover(&mut self) {
        self.hovered = match (self.area, self.cursor) {
            (Some(area), Some(cursor)) => hit_test(
                &self.groups,
                &self.viewport,
                area,
                cursor,
                self.config.hit_cols,
                self.config.hit_rows,
            ),
            _ => None,
        };
    }

    /// The hovered marker and its priority.
    pub fn hovered_marker(&self) -> Option<(Priority, &Marker)> {
        let target = self.hovered?;
        let group = self.groups.get(target.group)?;
        group.markers.get(target.marker).map(|m| (group.priority, m))
    }

    /// Markers of every visible group.
    pub fn visible_markers(&self) -> impl Iterator<Item = (Priority, &Marker)> + '_ {
        self.groups
            .iter()
            .filter(|g| g.visible)
            .flat_map(|g| g.markers.iter().map(move |m| (g.priority, m)))
    }
}

/// Extent of everything drawn, or the country's approximate extent when empty.
fn home_bounds(
    country: &MultiLineString<f64>,
    municipalities: &[MultiLineString<f64>],
    groups: &[MarkerGroup],
    mercator: &WebMercator,
) -> Result<Bounds> {
    let mut bounds = Bounds::of_lines(country);
    for layer in municipalities {
        bounds = bounds.union(&Bounds::of_lines(layer));
    }
    for marker in groups.iter().flat_map(|g| &g.markers) {
        bounds.include(marker.x, marker.y);
    }

    if bounds.is_empty() {
        let (min_x, min_y) = mercator.project(15.7, 42.5)?;
        let (max_x, max_y) = mercator.project(19.7, 45.3)?;
        bounds = Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        };
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, priority: u32, lon: f64, lat: f64) -> Entry {
        Entry {
            name: name.to_string(),
            category: "Hospital".to_string(),
            icon: "hospital".to_string(),
            priority: Priority(priority),
            longitude: lon,
            latitude: lat,
        }
    }

    fn marker_at(name: &str, x: f64, y: f64) -> Marker {
        Marker {
            name: name.to_string(),
            category: "Museum".to_string(),
            icon: "museum".to_string(),
            glyph: 'M',
            longitude: 0.0,
            latitude: 0.0,
            x,
            y,
        }
    }

    fn grid_viewport() -> Viewport {
        Viewport::new(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 100.0,
            max_y: 100.0,
        })
    }

    #[test]
    fn groups_follow_priority_order() {
        let entries = vec![
            entry("a", 10, 18.0, 44.0),
            entry("b", 30, 17.8, 43.3),
            entry("c", 10, 18.4, 43.8),
        ];
        let mercator = WebMercator::new().unwrap();
        let groups = build_marker_groups(
            &entries,
            &[Priority(30), Priority(10)],
            &IconTable::default(),
            &mercator,
        )
        .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].priority, Priority(30));
        assert_eq!(groups[0].markers.len(), 1);
        assert_eq!(groups[1].markers.len(), 2);
        assert_eq!(groups[1].markers[0].glyph, 'H');

        let (x, y) = mercator.project(18.0, 44.0).unwrap();
        assert_eq!((groups[1].markers[0].x, groups[1].markers[0].y), (x, y));
    }

    #[test]
    fn hit_test_picks_nearest_visible_marker() {
        let viewport = grid_viewport();
        let area = Rect::new(0, 0, 40, 20);
        let groups = vec![
            MarkerGroup {
                priority: Priority(10),
                markers: vec![marker_at("far", 52.0, 50.0), marker_at("near", 50.0, 50.0)],
                visible: true,
            },
            MarkerGroup {
                priority: Priority(20),
                markers: vec![marker_at("hidden", 50.0, 50.0)],
                visible: false,
            },
        ];

        let cursor = viewport.cell_of(area, 50.0, 50.0).unwrap();
        let hit = hit_test(&groups, &viewport, area, cursor, 1, 1).unwrap();
        assert_eq!(hit, HoverTarget { group: 0, marker: 1 });
    }

    #[test]
    fn hit_test_respects_hit_box() {
        let viewport = grid_viewport();
        let area = Rect::new(0, 0, 40, 20);
        let groups = vec![MarkerGroup {
            priority: Priority(10),
            markers: vec![marker_at("m", 50.0, 50.0)],
            visible: true,
        }];
        let (col, row) = viewport.cell_of(area, 50.0, 50.0).unwrap();

        assert!(hit_test(&groups, &viewport, area, (col + 1, row + 1), 1, 1).is_some());
        assert!(hit_test(&groups, &viewport, area, (col + 2, row), 1, 1).is_none());
        assert!(hit_test(&groups, &viewport, area, (col, row + 2), 1, 1).is_none());
    }

    #[test]
    fn hidden_groups_are_never_hovered() {
        let viewport = grid_viewport();
        let area = Rect::new(0, 0, 40, 20);
        let groups = vec![MarkerGroup {
            priority: Priority(10),
            markers: vec![marker_at("m", 50.0, 50.0)],
            visible: false,
        }];
        let cursor = viewport.cell_of(area, 50.0, 50.0).unwrap();
        assert!(hit_test(&groups, &viewport, area, cursor, 3, 3).is_none());
    }

    #[test]
    fn empty_data_falls_back_to_country_extent() {
        let mercator = WebMercator::new().unwrap();
        let bounds = home_bounds(&MultiLineString::new(vec![]), &[], &[], &mercator).unwrap();
        assert!(!bounds.is_empty());
        let (x, y) = mercator.project(18.4, 43.9).unwrap();
        assert!(bounds.contains(x, y));
    }
}
