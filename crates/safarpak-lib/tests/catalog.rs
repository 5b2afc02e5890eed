mod common;

use std::io::Write;

use safarpak_lib::{
    custom_location_name, load_catalog, Error, GeoPoint, LocationCatalog, LocationKind,
};
use tempfile::NamedTempFile;

use common::bundled;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_cities_with_header_synonyms() {
    let file = write_csv("Name, Lat, Lng\nAlpha, 30.0, 70.0\nBeta, 31.0, 71.0\n");
    let catalog = LocationCatalog::from_path(file.path()).expect("csv loads");

    assert_eq!(catalog.len(), 2);
    let alpha = catalog.get("Alpha").unwrap();
    assert_eq!((alpha.lat, alpha.lon), (30.0, 70.0));
    assert_eq!(alpha.kind, LocationKind::City);
    assert_eq!(catalog.source_path(), Some(file.path()));
}

#[test]
fn duplicate_rows_keep_the_first_entry() {
    let catalog = LocationCatalog::from_reader(
        "City,Latitude,Longitude\nAlpha,30,70\nAlpha,10,10\nBeta,31,71\n".as_bytes(),
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Alpha").unwrap().lat, 30.0);
    assert_eq!(catalog.names_sorted(), vec!["Alpha", "Beta"]);
}

#[test]
fn missing_columns_are_reported() {
    let err = LocationCatalog::from_reader("City,Latitude\nAlpha,30\n".as_bytes()).unwrap_err();
    match err {
        Error::CatalogValidation { message } => assert!(message.contains("longitude")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn out_of_range_coordinates_name_the_row() {
    let err = LocationCatalog::from_reader(
        "City,Latitude,Longitude\nAlpha,30,70\nBroken,95,70\n".as_bytes(),
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Broken"), "{message}");
    assert!(message.contains("row 3"), "{message}");
}

#[test]
fn unparsable_numbers_are_rejected() {
    let err =
        LocationCatalog::from_reader("City,Latitude,Longitude\nAlpha,north,70\n".as_bytes())
            .unwrap_err();
    assert!(matches!(err, Error::CatalogValidation { .. }));
}

#[test]
fn bundled_catalog_merges_cities_and_areas() {
    let catalog = bundled();

    assert_eq!(catalog.hub_cities().len(), 53);
    assert_eq!(catalog.len(), 217);
    assert_eq!(catalog.categories().len(), 14);
    assert_eq!(catalog.get("Karachi").unwrap().kind, LocationKind::City);
    assert_eq!(
        catalog.get("Clifton Karachi").unwrap().kind,
        LocationKind::NamedArea
    );

    let airports = catalog.category("airports").expect("airports category");
    assert!(airports
        .names
        .iter()
        .any(|name| name == "Jinnah International Airport Karachi"));
}

#[test]
fn hub_cities_follow_dataset_order() {
    let hubs = bundled().hub_cities();
    assert_eq!(hubs[0].name, "Karachi");
    assert_eq!(hubs[1].name, "Lahore");
}

#[test]
fn custom_points_are_named_after_coordinates_and_inserted_once() {
    let mut catalog = LocationCatalog::new();
    let first = catalog.insert_custom(25.123456, 66.5);
    let second = catalog.insert_custom(25.123456, 66.5);

    assert_eq!(first, "Custom Location (25.1235, 66.5000)");
    assert_eq!(first, second);
    assert_eq!(first, custom_location_name(25.123456, 66.5));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(&first).unwrap().kind, LocationKind::Custom);
}

#[test]
fn picked_points_snap_to_nearby_locations() {
    let mut catalog = bundled().clone();
    let before = catalog.len();

    // About 1 km from the Lahore city entry.
    let snapped = catalog.resolve_point(31.5550, 74.3500);
    assert_eq!(snapped, "Lahore");
    assert_eq!(catalog.len(), before);

    let custom = catalog.resolve_point(27.0, 64.0);
    assert!(custom.starts_with("Custom Location"));
    assert_eq!(catalog.len(), before + 1);
    assert!(catalog.hub_cities().iter().all(|hub| hub.name != custom));
}

#[test]
fn nearest_location_reports_distance() {
    let (nearest, distance) = bundled()
        .nearest(GeoPoint::new(24.8607, 67.0011))
        .expect("catalog not empty");
    assert_eq!(nearest.name, "Karachi");
    assert_eq!(distance, 0.0);
}

#[test]
fn misspelled_names_get_suggestions() {
    let catalog = bundled();
    let suggestions = catalog.fuzzy_matches("Peshwar", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("Peshawar"));

    match catalog.resolve("Islamabd") {
        Err(Error::UnknownLocation { suggestions, .. }) => {
            assert!(suggestions.iter().any(|s| s == "Islamabad"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn explicit_csv_path_replaces_bundled_cities() {
    let file = write_csv("City,Latitude,Longitude\nAlpha,30.0,70.0\n");
    let catalog = load_catalog(Some(file.path())).expect("csv loads");

    assert_eq!(catalog.hub_cities().len(), 1);
    assert!(catalog.contains("Clifton Karachi"));
}

#[test]
fn missing_csv_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(Some(&dir.path().join("absent.csv"))).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
