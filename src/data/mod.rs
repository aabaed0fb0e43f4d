//! Data structures and loading.
//!
//! A data directory holds the category table, the points of interest and the
//! municipality and country outlines. [`MapData::load`] reads all of it and
//! joins the points of interest with their categories.

mod reader;
mod shapes;

pub use reader::{read_categories, read_pois};
pub use shapes::{find_layer_files, read_layer, Layer};

use crate::error::{MapError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Category table file name.
pub const CATEGORIES_FILE: &str = "categories.csv";
/// Point of interest file name.
pub const POIS_FILE: &str = "point_of_interests.csv";
/// Municipality layer directory.
pub const MUNICIPALITIES_DIR: &str = "municipalities";
/// Country outline, relative to the data directory.
pub const COUNTRY_FILE: &str = "country/bosnia.shp";

/// Importance class of a category. Lower is more important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u32);

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Category name, the join key.
    pub category: String,
    /// Icon name.
    pub icon: String,
    /// Priority class.
    pub priority: Priority,
}

/// One row of the point of interest table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointOfInterest {
    /// Display name.
    pub name: String,
    /// Category name.
    pub category: String,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// A point of interest joined with its category.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Display name.
    pub name: String,
    /// Category name.
    pub category: String,
    /// Icon name of the category.
    pub icon: String,
    /// Priority of the category.
    pub priority: Priority,
    /// WGS84 longitude.
    pub longitude: f64,
    /// WGS84 latitude.
    pub latitude: f64,
}

/// Everything read from a data directory.
#[derive(Debug, Clone)]
pub struct MapData {
    /// Data directory.
    pub root: PathBuf,
    /// Category table in file order.
    pub categories: Vec<Category>,
    /// Points of interest in file order.
    pub pois: Vec<PointOfInterest>,
    /// Points of interest joined with their category.
    pub entries: Vec<Entry>,
    /// Unique priorities of the joined entries, first-seen order.
    pub priorities: Vec<Priority>,
    /// Municipality outlines, sorted by path.
    pub municipalities: Vec<Layer>,
    /// Country outline.
    pub country: Layer,
}

impl MapData {
    /// Load every file of a data directory.
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(MapError::file_open(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found"),
            ));
        }

        let categories = read_categories(&root.join(CATEGORIES_FILE))?;
        let pois = read_pois(&root.join(POIS_FILE))?;
        let entries = join(&pois, &categories);
        let priorities = unique_priorities(&entries);

        let municipality_dir = root.join(MUNICIPALITIES_DIR);
        let mut municipalities = Vec::new();
        if municipality_dir.is_dir() {
            for path in find_layer_files(&municipality_dir)? {
                municipalities.push(read_layer(&path)?);
            }
        } else {
            tracing::warn!("No municipality directory at {}", municipality_dir.display());
        }

        let country = read_layer(&country_path(root))?;

        tracing::info!(
            categories = categories.len(),
            pois = pois.len(),
            entries = entries.len(),
            municipalities = municipalities.len(),
            "Loaded map data from {}",
            root.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            categories,
            pois,
            entries,
            priorities,
            municipalities,
            country,
        })
    }

    /// Number of joined entries with the given priority.
    pub fn count_for(&self, priority: Priority) -> usize {
        self.entries
            .iter()
            .filter(|e| e.priority == priority)
            .count()
    }
}

/// Country outline path; prefers the shapefile, falls back to a GeoJSON sibling.
fn country_path(root: &Path) -> PathBuf {
    let shp = root.join(COUNTRY_FILE);
    if shp.exists() {
        return shp;
    }
    let geojson = shp.with_extension("geojson");
    if geojson.exists() {
        geojson
    } else {
        shp
    }
}

/// Inner join of points of interest with categories on the category name.
///
/// Duplicate category rows multiply matching points, like a relational merge.
pub fn join(pois: &[PointOfInterest], categories: &[Category]) -> Vec<Entry> {
    let mut by_name: HashMap<&str, Vec<&Category>> = HashMap::new();
    for category in categories {
        by_name
            .entry(category.category.as_str())
            .or_default()
            .push(category);
    }

    let mut entries = Vec::with_capacity(pois.len());
    for poi in pois {
        let Some(matches) = by_name.get(poi.category.as_str()) else {
            tracing::warn!(
                "Dropping '{}': unknown category '{}'",
                poi.name,
                poi.category
            );
            continue;
        };
        for category in matches {
            entries.push(Entry {
                name: poi.name.clone(),
                category: poi.category.clone(),
                icon: category.icon.clone(),
                priority: category.priority,
                longitude: poi.longitude,
                latitude: poi.latitude,
            });
        }
    }
    entries
}

/// Unique priorities in first-seen order.
pub fn unique_priorities(entries: &[Entry]) -> Vec<Priority> {
    let mut seen = Vec::new();
    for entry in entries {
        if !seen.contains(&entry.priority) {
            seen.push(entry.priority);
        }
    }
    seen
}
