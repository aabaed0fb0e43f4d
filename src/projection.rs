//! Coordinate transforms and projected bounds.
//!
//! Layers may declare any CRS; they are brought to WGS84 degrees on load with
//! [`ToWgs84`]. The map works in spherical Web Mercator (EPSG:3857) metres,
//! produced by [`WebMercator`].

use crate::error::{MapError, Result};
use geo::{BoundingRect, Coord, MapCoords, MultiLineString};
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use std::fmt;

/// Latitude limit of Web Mercator, in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// WGS84 longitude/latitude (EPSG:4326).
pub const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Longitude/latitude on the Web Mercator sphere. EPSG:3857 takes WGS84
/// degrees as they are, without a datum shift onto the sphere.
const SPHERE: &str = "+proj=longlat +a=6378137 +b=6378137 +no_defs";

/// Spherical Web Mercator (EPSG:3857).
const WEB_MERCATOR: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

fn parse_proj(definition: &str) -> Result<Proj> {
    Proj::from_proj_string(definition).map_err(|e| MapError::projection(definition, e.to_string()))
}

fn is_geographic(definition: &str) -> bool {
    ["+proj=longlat", "+proj=latlong", "+proj=lonlat", "+proj=latlon"]
        .iter()
        .any(|p| definition.contains(p))
}

/// WGS84 degrees to Web Mercator metres and back.
pub struct WebMercator {
    sphere: Proj,
    mercator: Proj,
}

impl WebMercator {
    /// Build the transform.
    pub fn new() -> Result<Self> {
        Ok(Self {
            sphere: parse_proj(SPHERE)?,
            mercator: parse_proj(WEB_MERCATOR)?,
        })
    }

    /// Project a longitude/latitude pair. Latitude is clamped to the
    /// Web Mercator limit.
    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let mut point = (lon.to_radians(), lat.to_radians(), 0.0);
        transform(&self.sphere, &self.mercator, &mut point)
            .map_err(|e| MapError::projection(WEB_MERCATOR, e.to_string()))?;
        Ok((point.0, point.1))
    }

    /// Inverse of [`WebMercator::project`].
    pub fn unproject(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let mut point = (x, y, 0.0);
        transform(&self.mercator, &self.sphere, &mut point)
            .map_err(|e| MapError::projection(WEB_MERCATOR, e.to_string()))?;
        Ok((point.0.to_degrees(), point.1.to_degrees()))
    }

    /// Project every coordinate of an outline layer.
    pub fn project_lines(&self, lines: &MultiLineString<f64>) -> Result<MultiLineString<f64>> {
        lines.try_map_coords(|Coord { x, y }| {
            let (x, y) = self.project(x, y)?;
            Ok(Coord { x, y })
        })
    }
}

impl fmt::Debug for WebMercator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebMercator")
            .field("definition", &WEB_MERCATOR)
            .finish()
    }
}

/// Transform from a layer's declared CRS to WGS84 degrees.
pub struct ToWgs84 {
    definition: String,
    geographic: bool,
    source: Proj,
    wgs84: Proj,
}

impl ToWgs84 {
    /// Transform from a PROJ.4 definition.
    pub fn from_proj_string(definition: &str) -> Result<Self> {
        Ok(Self {
            definition: definition.to_string(),
            geographic: is_geographic(definition),
            source: parse_proj(definition)?,
            wgs84: parse_proj(WGS84)?,
        })
    }

    /// Transform from a WKT definition, as found in `.prj` files.
    pub fn from_wkt(wkt: &str) -> Result<Self> {
        let definition = proj4wkt::wkt_to_projstring(wkt)
            .map_err(|e| MapError::projection(wkt.trim(), format!("{:?}", e)))?;
        Self::from_proj_string(&definition)
    }

    /// PROJ.4 definition of the source CRS.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Convert one coordinate to longitude/latitude degrees.
    pub fn convert(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let mut point = if self.geographic {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };
        transform(&self.source, &self.wgs84, &mut point)
            .map_err(|e| MapError::projection(&self.definition, e.to_string()))?;
        Ok((point.0.to_degrees(), point.1.to_degrees()))
    }

    /// Convert every coordinate of an outline layer.
    pub fn convert_lines(&self, lines: &MultiLineString<f64>) -> Result<MultiLineString<f64>> {
        lines.try_map_coords(|Coord { x, y }| {
            let (x, y) = self.convert(x, y)?;
            Ok(Coord { x, y })
        })
    }
}

impl fmt::Debug for ToWgs84 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToWgs84")
            .field("definition", &self.definition)
            .finish()
    }
}

/// Axis-aligned extent of projected data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl Bounds {
    /// Bounds containing nothing; any `include` replaces it.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Bounds of an outline layer, empty for a layer without coordinates.
    pub fn of_lines(lines: &MultiLineString<f64>) -> Self {
        match lines.bounding_rect() {
            Some(rect) => Self {
                min_x: rect.min().x,
                min_y: rect.min().y,
                max_x: rect.max().x,
                max_y: rect.max().y,
            },
            None => Self::empty(),
        }
    }

    /// True if nothing was included.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow to include a point.
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grow every side by `fraction` of the larger dimension.
    ///
    /// Degenerate (zero-size) bounds grow by one kilometre instead.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let span = self.width().max(self.height());
        let margin = if span > 0.0 { span * fraction } else { 1000.0 };
        Bounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Width in projected units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height in projected units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Centre point.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True if the point lies inside (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}
