//! CSV readers for the category and point of interest tables.

use super::{Category, PointOfInterest};
use crate::error::{MapError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Category table delimiter.
const CATEGORY_DELIMITER: u8 = b'\t';
/// Point of interest table delimiter.
const POI_DELIMITER: u8 = b';';

/// Read the tab separated category table.
pub fn read_categories(path: &Path) -> Result<Vec<Category>> {
    read_table(path, CATEGORY_DELIMITER)
}

/// Read the semicolon separated point of interest table.
///
/// Columns other than `name`, `category`, `latitude` and `longitude` are ignored.
pub fn read_pois(path: &Path) -> Result<Vec<PointOfInterest>> {
    read_table(path, POI_DELIMITER)
}

fn read_table<T: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|e| MapError::file_open(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| MapError::csv(path, e))?);
    }

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
