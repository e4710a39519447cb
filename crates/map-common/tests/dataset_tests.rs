//! Tests for GeoJSON dataset loading.

use map_common::{GeoDataset, Geometry, MapError, Position};
use test_utils::{
    feature_collection, fixtures, geojson_with_point, geojson_with_string_id, geojson_without_id,
    mini_japan_geojson, polygon_feature, rect_ring, temp_test_dir, write_test_file,
};

// ============================================================================
// Successful loads
// ============================================================================

#[test]
fn test_load_mini_japan_preserves_order() {
    let dataset = GeoDataset::from_geojson_str(&mini_japan_geojson()).unwrap();
    let ids: Vec<i64> = dataset.regions().iter().map(|r| r.id).collect();
    assert_eq!(ids, fixtures::MINI_JAPAN_IDS);
}

#[test]
fn test_geometry_types() {
    let dataset = GeoDataset::from_geojson_str(&mini_japan_geojson()).unwrap();

    let tokyo = dataset.get(fixtures::TOKYO_ID).unwrap();
    assert!(matches!(tokyo.geometry, Geometry::MultiPolygon(ref parts) if parts.len() == 2));

    let kanagawa = dataset.get(fixtures::KANAGAWA_ID).unwrap();
    match &kanagawa.geometry {
        Geometry::Polygon(rings) => {
            assert_eq!(rings.len(), 2, "outer ring plus hole");
            assert_eq!(rings[0][0], Position::new(138.9, 35.1));
        }
        other => panic!("expected Polygon, got {}", other.type_name()),
    }
}

#[test]
fn test_load_from_file() {
    let dir = temp_test_dir();
    let path = write_test_file(dir.path(), "japan.geojson", mini_japan_geojson().as_bytes());

    let dataset = GeoDataset::load(&path).unwrap();
    assert_eq!(dataset.len(), 5);
    assert!(!dataset.is_empty());
}

#[test]
fn test_name_property_is_optional() {
    let mut feature = polygon_feature(3, vec![rect_ring(0.0, 0.0, 1.0, 1.0)]);
    feature["properties"]["name"] = serde_json::json!("Iwate");
    let dataset = GeoDataset::from_geojson_str(&feature_collection(vec![feature])).unwrap();
    assert_eq!(dataset.get(3).unwrap().name.as_deref(), Some("Iwate"));
}

#[test]
fn test_empty_collection() {
    let dataset = GeoDataset::from_geojson_str(&feature_collection(vec![])).unwrap();
    assert!(dataset.is_empty());
}

// ============================================================================
// Dataset errors
// ============================================================================

#[test]
fn test_missing_file_is_dataset_error() {
    let dir = temp_test_dir();
    let err = GeoDataset::load(dir.path().join("missing.geojson")).unwrap_err();
    assert!(matches!(err, MapError::Dataset(_)));
    assert_eq!(err.http_status_code(), 500);
}

#[test]
fn test_malformed_json_is_dataset_error() {
    let err = GeoDataset::from_geojson_str("{\"type\": \"FeatureCollection\", ").unwrap_err();
    assert!(matches!(err, MapError::Dataset(_)));
}

#[test]
fn test_wrong_top_level_type_is_dataset_error() {
    let err =
        GeoDataset::from_geojson_str(r#"{"type":"Feature","features":[]}"#).unwrap_err();
    assert!(matches!(err, MapError::Dataset(_)));
}

// ============================================================================
// Geometry shape errors
// ============================================================================

#[test]
fn test_string_id_is_shape_error() {
    let err = GeoDataset::from_geojson_str(&geojson_with_string_id()).unwrap_err();
    assert!(matches!(err, MapError::GeometryShape(_)));
    assert!(err.to_string().contains("Invalid ID format"));
}

#[test]
fn test_missing_id_is_shape_error() {
    let err = GeoDataset::from_geojson_str(&geojson_without_id()).unwrap_err();
    assert!(matches!(err, MapError::GeometryShape(_)));
}

#[test]
fn test_point_geometry_is_shape_error() {
    let err = GeoDataset::from_geojson_str(&geojson_with_point()).unwrap_err();
    assert!(matches!(err, MapError::GeometryShape(_)));
    assert!(err.to_string().contains("Point"));
}

#[test]
fn test_polygon_without_rings_is_shape_error() {
    let feature = polygon_feature(9, vec![]);
    let err = GeoDataset::from_geojson_str(&feature_collection(vec![feature])).unwrap_err();
    assert!(matches!(err, MapError::GeometryShape(_)));
}
