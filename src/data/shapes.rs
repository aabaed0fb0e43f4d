//! Outline layers read from ESRI shapefiles or GeoJSON.

use crate::error::{MapError, Result};
use crate::projection::ToWgs84;
use geo::{Coord, Geometry, LineString, MultiLineString, Polygon};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outline geometry of one file, in WGS84 degrees.
///
/// Polygons keep only their ring outlines since the map draws outlines.
/// Shapefiles with a `.prj` sidecar are converted from the CRS it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// File stem.
    pub name: String,
    /// File the layer was read from.
    pub source: PathBuf,
    /// Ring and line outlines.
    pub lines: MultiLineString<f64>,
}

impl Layer {
    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.lines.0.iter().map(|l| l.0.len()).sum()
    }
}

/// Layer files below a directory (walked recursively), sorted by path.
pub fn find_layer_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| MapError::Walk {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() && is_layer_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_layer_file(path: &Path) -> bool {
    matches!(
        extension(path).as_str(),
        "shp" | "geojson" | "json"
    )
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Read one outline layer, dispatching on the file extension.
pub fn read_layer(path: &Path) -> Result<Layer> {
    if !path.exists() {
        return Err(MapError::file_open(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "layer file not found"),
        ));
    }

    let lines = match extension(path).as_str() {
        "shp" => read_shapefile(path)?,
        "geojson" | "json" => read_geojson(path)?,
        other => return Err(MapError::unsupported_format(other)),
    };

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!("Layer {} has {} outlines", name, lines.0.len());

    Ok(Layer {
        name,
        source: path.to_path_buf(),
        lines,
    })
}

fn read_shapefile(path: &Path) -> Result<MultiLineString<f64>> {
    let reader =
        shapefile::ShapeReader::from_path(path).map_err(|e| MapError::shapefile(path, e))?;
    let shapes = reader.read().map_err(|e| MapError::shapefile(path, e))?;

    let mut lines = Vec::new();
    for shape in &shapes {
        lines.extend(shape_outlines(shape));
    }
    let lines = MultiLineString::new(lines);

    match declared_crs(path)? {
        Some(crs) => {
            tracing::debug!("Converting {} from {}", path.display(), crs.definition());
            crs.convert_lines(&lines)
        },
        None => Ok(lines),
    }
}

/// CRS declared by the `.prj` sidecar of a shapefile, if there is one.
fn declared_crs(path: &Path) -> Result<Option<ToWgs84>> {
    let prj = path.with_extension("prj");
    if !prj.is_file() {
        return Ok(None);
    }
    let wkt = std::fs::read_to_string(&prj).map_err(|e| MapError::file_open(&prj, e))?;
    if wkt.trim().is_empty() {
        return Ok(None);
    }
    ToWgs84::from_wkt(&wkt).map(Some)
}

/// Outlines of one shape record. Point-like and null shapes have none.
pub(crate) fn shape_outlines(shape: &shapefile::Shape) -> Vec<LineString<f64>> {
    use shapefile::Shape;

    match shape {
        Shape::Polygon(p) => p
            .rings()
            .iter()
            .filter_map(|r| outline(r.points().iter().map(|pt| (pt.x, pt.y))))
            .collect(),
        Shape::PolygonM(p) => p
            .rings()
            .iter()
            .filter_map(|r| outline(r.points().iter().map(|pt| (pt.x, pt.y))))
            .collect(),
        Shape::PolygonZ(p) => p
            .rings()
            .iter()
            .filter_map(|r| outline(r.points().iter().map(|pt| (pt.x, pt.y))))
            .collect(),
        Shape::Polyline(l) => l
            .parts()
            .iter()
            .filter_map(|part| outline(part.iter().map(|pt| (pt.x, pt.y))))
            .collect(),
        Shape::PolylineM(l) => l
            .parts()
            .iter()
            .filter_map(|part| outline(part.iter().map(|pt| (pt.x, pt.y))))
            .collect(),
        Shape::PolylineZ(l) => l
            .parts()
            .iter()
            .filter_map(|part| outline(part.iter().map(|pt| (pt.x, pt.y))))
            .collect(),
        _ => Vec::new(),
    }
}

fn outline(points: impl Iterator<Item = (f64, f64)>) -> Option<LineString<f64>> {
    let coords: Vec<Coord<f64>> = points.map(|(x, y)| Coord { x, y }).collect();
    (coords.len() >= 2).then(|| LineString::new(coords))
}

fn read_geojson(path: &Path) -> Result<MultiLineString<f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| MapError::file_open(path, e))?;
    let geojson: geojson::GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| MapError::geojson(path, e.to_string()))?;
    let collection = geo::GeometryCollection::<f64>::try_from(&geojson)
        .map_err(|e| MapError::geojson(path, e.to_string()))?;

    let mut lines = Vec::new();
    for geometry in collection {
        collect_outlines(&geometry, &mut lines);
    }
    Ok(MultiLineString::new(lines))
}

/// Append the outlines of a geometry.
pub(crate) fn collect_outlines(geometry: &Geometry<f64>, out: &mut Vec<LineString<f64>>) {
    match geometry {
        Geometry::Polygon(p) => polygon_outlines(p, out),
        Geometry::MultiPolygon(mp) => mp.iter().for_each(|p| polygon_outlines(p, out)),
        Geometry::LineString(l) => out.push(l.clone()),
        Geometry::MultiLineString(ml) => out.extend(ml.iter().cloned()),
        Geometry::Line(l) => out.push(LineString::new(vec![l.start, l.end])),
        Geometry::Rect(r) => polygon_outlines(&r.to_polygon(), out),
        Geometry::Triangle(t) => polygon_outlines(&t.to_polygon(), out),
        Geometry::GeometryCollection(gc) => gc.iter().for_each(|g| collect_outlines(g, out)),
        Geometry::Point(_) | Geometry::MultiPoint(_) => {},
    }
}

fn polygon_outlines(polygon: &Polygon<f64>, out: &mut Vec<LineString<f64>>) {
    out.push(polygon.exterior().clone());
    out.extend(polygon.interiors().iter().cloned());
}
