//! Fixture data directory shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const CATEGORIES: &str = "category\ticon\tpriority
Hospital\thospital\t10
School\tschool\t20
Museum\tmuseum\t30
Casino\tcasino\t40
";

pub const POIS: &str = "name;category;latitude;longitude;address
KCUS;Hospital;43.8663;18.3985;Bolnička 25
Stari most;Museum;43.3373;17.8150;Mostar
Gimnazija Mostar;School;43.3438;17.8078;Mostar
Zemaljski muzej;Museum;43.8553;18.4022;Sarajevo
Ghost;Ufo;44.0;18.0;nowhere
";

pub const COUNTRY: &str = r#"{
  "type": "FeatureCollection",
  "features": [{
    "type": "Feature",
    "properties": {"name": "Bosnia and Herzegovina"},
    "geometry": {
      "type": "Polygon",
      "coordinates": [[[15.75, 45.2], [19.6, 44.9], [19.2, 42.6], [16.0, 43.5], [15.75, 45.2]]]
    }
  }]
}"#;

pub const SARAJEVO: &str = r#"{
  "type": "Feature",
  "properties": {"name": "Centar"},
  "geometry": {
    "type": "MultiPolygon",
    "coordinates": [[[[18.35, 43.83], [18.45, 43.83], [18.45, 43.90], [18.35, 43.90], [18.35, 43.83]]]]
  }
}"#;

pub const MOSTAR: &str = r#"{
  "type": "Polygon",
  "coordinates": [[[17.70, 43.25], [17.95, 43.25], [17.95, 43.45], [17.70, 43.45], [17.70, 43.25]]]
}"#;

/// Write a complete data directory below `dir`.
pub fn write_fixture(dir: &Path) {
    fs::write(dir.join("categories.csv"), CATEGORIES).unwrap();
    fs::write(dir.join("point_of_interests.csv"), POIS).unwrap();

    let municipalities = dir.join("municipalities");
    fs::create_dir_all(municipalities.join("fbih")).unwrap();
    fs::write(municipalities.join("fbih/sarajevo.geojson"), SARAJEVO).unwrap();
    fs::write(municipalities.join("mostar.geojson"), MOSTAR).unwrap();
    fs::write(municipalities.join("readme.txt"), "not a layer").unwrap();

    fs::create_dir_all(dir.join("country")).unwrap();
    fs::write(dir.join("country/bosnia.geojson"), COUNTRY).unwrap();
}

/// WKT of WGS 84 / UTM zone 34N (EPSG:32634).
pub const UTM_34N_WKT: &str = r#"PROJCS["WGS 84 / UTM zone 34N",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],PROJECTION["Transverse_Mercator"],PARAMETER["latitude_of_origin",0],PARAMETER["central_meridian",21],PARAMETER["scale_factor",0.9996],PARAMETER["false_easting",500000],PARAMETER["false_northing",0],UNIT["metre",1,AUTHORITY["EPSG","9001"]],AXIS["Easting",EAST],AXIS["Northing",NORTH],AUTHORITY["EPSG","32634"]]"#;

/// Country outline corners in WGS84 degrees, clockwise and closed.
pub const COUNTRY_DEGREES: [(f64, f64); 5] = [
    (15.75, 45.2),
    (19.6, 44.9),
    (19.2, 42.6),
    (16.0, 43.5),
    (15.75, 45.2),
];

/// The same corners in UTM zone 34N metres.
pub const COUNTRY_UTM_34N: [(f64, f64); 5] = [
    (87_665.6, 5_018_591.6),
    (389_466.8, 4_972_795.1),
    (352_334.8, 4_717_967.3),
    (95_751.1, 4_828_499.0),
    (87_665.6, 5_018_591.6),
];

/// Write a single-polygon shapefile (`.shp` and `.shx`).
pub fn write_polygon_shp(path: &Path, ring: &[(f64, f64)]) {
    let points = ring
        .iter()
        .map(|&(x, y)| shapefile::Point::new(x, y))
        .collect();
    let polygon = shapefile::Polygon::new(shapefile::PolygonRing::Outer(points));
    shapefile::ShapeWriter::from_path(path)
        .unwrap()
        .write_shapes(&[polygon])
        .unwrap();
}
