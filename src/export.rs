//! Save tool: write the visible markers as a GeoJSON FeatureCollection.

use crate::config::PriorityNames;
use crate::error::{MapError, Result};
use crate::map::MapView;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Build a FeatureCollection (WGS84) of every marker in a visible group.
pub fn visible_markers_collection(view: &MapView, names: &PriorityNames) -> FeatureCollection {
    let features = view
        .visible_markers()
        .map(|(priority, marker)| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), marker.name.clone().into());
            properties.insert("category".to_string(), marker.category.clone().into());
            properties.insert("icon".to_string(), marker.icon.clone().into());
            properties.insert("priority".to_string(), priority.0.into());
            properties.insert("priority_name".to_string(), names.name(priority).into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    marker.longitude,
                    marker.latitude,
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Write the visible markers to `path`. Returns the number of features written.
pub fn export_visible(view: &MapView, names: &PriorityNames, path: &Path) -> Result<usize> {
    let collection = visible_markers_collection(view, names);
    let count = collection.features.len();
    let export_error = |source: std::io::Error| MapError::Export {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(export_error)?);
    serde_json::to_writer_pretty(&mut writer, &collection).map_err(|e| export_error(e.into()))?;
    writer.flush().map_err(export_error)?;
    tracing::info!("Exported {} markers to {}", count, path.display());
    Ok(count)
}
