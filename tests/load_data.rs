mod common;

use bihmap::data::{MapData, Priority};
use bihmap::MapError;
use geo::BoundingRect;

#[test]
fn loads_and_joins_fixture() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());

    let data = MapData::load(dir.path()).unwrap();

    assert_eq!(data.categories.len(), 4);
    assert_eq!(data.pois.len(), 5);
    // "Ghost" has no matching category.
    assert_eq!(data.entries.len(), 4);
    assert!(data.entries.iter().all(|e| e.name != "Ghost"));
    assert_eq!(
        data.priorities,
        vec![Priority(10), Priority(30), Priority(20)]
    );
    assert_eq!(data.count_for(Priority(30)), 2);
}

#[test]
fn walks_municipalities_recursively_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());

    let data = MapData::load(dir.path()).unwrap();
    let names: Vec<_> = data.municipalities.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["sarajevo", "mostar"]);
    assert_eq!(data.municipalities[0].lines.0.len(), 1);
    assert_eq!(data.municipalities[1].vertex_count(), 5);
}

#[test]
fn country_falls_back_to_geojson() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());

    let data = MapData::load(dir.path()).unwrap();
    assert_eq!(data.country.name, "bosnia");
    assert_eq!(data.country.vertex_count(), 5);
}

#[test]
fn missing_country_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());
    std::fs::remove_file(dir.path().join("country/bosnia.geojson")).unwrap();

    let err = MapData::load(dir.path()).unwrap_err();
    assert!(matches!(err, MapError::FileOpen { .. }));
    assert!(err.to_string().contains("bosnia.shp"));
}

#[test]
fn broken_municipality_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());
    std::fs::write(dir.path().join("municipalities/zenica.geojson"), "{ not json").unwrap();

    let err = MapData::load(dir.path()).unwrap_err();
    assert!(matches!(err, MapError::GeoJson { .. }));
    assert!(err.to_string().contains("zenica.geojson"));
}

#[test]
fn empty_municipality_directory_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());
    std::fs::remove_dir_all(dir.path().join("municipalities")).unwrap();
    std::fs::create_dir(dir.path().join("municipalities")).unwrap();

    let data = MapData::load(dir.path()).unwrap();
    assert!(data.municipalities.is_empty());
}

#[test]
fn country_shapefile_is_preferred_over_geojson() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());
    common::write_polygon_shp(
        &dir.path().join("country/bosnia.shp"),
        &common::COUNTRY_DEGREES,
    );
    common::write_polygon_shp(
        &dir.path().join("municipalities/zenica.shp"),
        &[(17.8, 44.1), (17.8, 44.3), (18.0, 44.3), (18.0, 44.1), (17.8, 44.1)],
    );

    let data = MapData::load(dir.path()).unwrap();
    assert_eq!(data.country.source, dir.path().join("country/bosnia.shp"));
    assert_eq!(data.country.vertex_count(), 5);

    let names: Vec<_> = data.municipalities.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["sarajevo", "mostar", "zenica"]);
    assert_eq!(data.municipalities[2].vertex_count(), 5);
}

#[test]
fn projected_country_shapefile_follows_its_prj() {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());
    let shp = dir.path().join("country/bosnia.shp");
    common::write_polygon_shp(&shp, &common::COUNTRY_UTM_34N);
    std::fs::write(shp.with_extension("prj"), common::UTM_34N_WKT).unwrap();

    let data = MapData::load(dir.path()).unwrap();
    let bounds = data.country.lines.bounding_rect().unwrap();
    let close = |a: f64, b: f64| (a - b).abs() < 0.01;
    assert!(close(bounds.min().x, 15.75), "{:?}", bounds);
    assert!(close(bounds.max().x, 19.6), "{:?}", bounds);
    assert!(close(bounds.min().y, 42.6), "{:?}", bounds);
    assert!(close(bounds.max().y, 45.2), "{:?}", bounds);
}
