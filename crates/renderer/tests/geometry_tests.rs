//! Tests for view bounds and path building against the miniature dataset.

use map_common::{GeoDataset, IntensityAssignment, MapError, Region, ViewBounds};
use renderer::extent::{compute_bounds, dataset_bounds, resolve_view_bounds};
use renderer::path::{build_paths, ring_path, vertex_count};
use test_utils::{
    assert_approx_eq, feature_collection, fixtures::bounds, mini_japan_geojson, polygon_feature,
    rect_ring, KANAGAWA_ID, OKINAWA_ID, OSAKA_ID, TOKYO_ID,
};

fn mini_japan() -> Vec<Region> {
    GeoDataset::from_geojson_str(&mini_japan_geojson())
        .unwrap()
        .regions()
        .to_vec()
}

fn assert_bounds(actual: ViewBounds, (min_lon, min_lat, max_lon, max_lat): (f64, f64, f64, f64)) {
    assert_approx_eq!(actual.min_lon, min_lon, 1e-9);
    assert_approx_eq!(actual.min_lat, min_lat, 1e-9);
    assert_approx_eq!(actual.max_lon, max_lon, 1e-9);
    assert_approx_eq!(actual.max_lat, max_lat, 1e-9);
}

fn identity(lon: f64, lat: f64) -> (f64, f64) {
    (lon, lat)
}

// ============================================================================
// Bounds tests
// ============================================================================

#[test]
fn test_bounds_from_single_active_region() {
    let regions = mini_japan();
    let intensities = IntensityAssignment::new().with_level(TOKYO_ID, 5).unwrap();

    // Both parts of the multi-polygon count, including the southern islands.
    assert_bounds(compute_bounds(&regions, &intensities), bounds::TOKYO);
}

#[test]
fn test_bounds_contain_every_active_vertex() {
    let regions = mini_japan();
    let intensities = IntensityAssignment::new()
        .with_level(OSAKA_ID, 2)
        .unwrap()
        .with_level(OKINAWA_ID, 7)
        .unwrap();

    let b = compute_bounds(&regions, &intensities);
    for region in regions.iter().filter(|r| intensities.is_active(r.id)) {
        for p in region.geometry.positions() {
            assert!(b.contains_point(p.lon, p.lat), "{:?} outside {:?}", p, b);
        }
    }
    assert_bounds(b, (127.6, 26.0, 135.7, 34.9));
}

#[test]
fn test_inactive_region_never_widens_bounds() {
    let intensities = IntensityAssignment::new().with_level(KANAGAWA_ID, 3).unwrap();

    let narrow = GeoDataset::from_geojson_str(&feature_collection(vec![
        polygon_feature(KANAGAWA_ID, vec![rect_ring(138.9, 35.1, 139.8, 35.5)]),
        polygon_feature(OSAKA_ID, vec![rect_ring(135.1, 34.3, 135.7, 34.9)]),
    ]))
    .unwrap();
    let widened = GeoDataset::from_geojson_str(&feature_collection(vec![
        polygon_feature(KANAGAWA_ID, vec![rect_ring(138.9, 35.1, 139.8, 35.5)]),
        polygon_feature(OSAKA_ID, vec![rect_ring(100.0, 10.0, 170.0, 60.0)]),
    ]))
    .unwrap();

    assert_eq!(
        compute_bounds(narrow.regions(), &intensities),
        compute_bounds(widened.regions(), &intensities)
    );
}

#[test]
fn test_no_active_regions_is_inverted() {
    let regions = mini_japan();
    assert!(compute_bounds(&regions, &IntensityAssignment::new()).is_inverted());
}

#[test]
fn test_resolve_falls_back_to_dataset_bounds() {
    let regions = mini_japan();
    let resolved = resolve_view_bounds(&regions, &IntensityAssignment::new()).unwrap();
    assert_bounds(resolved, bounds::ALL);
    assert_eq!(resolved, dataset_bounds(&regions));
}

#[test]
fn test_resolve_empty_dataset_is_dataset_error() {
    let err = resolve_view_bounds(&[], &IntensityAssignment::new()).unwrap_err();
    assert!(matches!(err, MapError::Dataset(_)));
}

// ============================================================================
// Path tests
// ============================================================================

#[test]
fn test_path_vertex_count_matches_ring() {
    for region in mini_japan() {
        for ring in region.geometry.rings() {
            let path = ring_path(ring, &identity);
            assert_eq!(vertex_count(&path), ring.len(), "region {}", region.id);
            assert!(path.starts_with('M'));
            assert!(path.ends_with(" Z"));
        }
    }
}

#[test]
fn test_multipolygon_path_count_is_total_ring_count() {
    let regions = mini_japan();
    let tokyo = regions.iter().find(|r| r.id == TOKYO_ID).unwrap();
    assert_eq!(build_paths(&tokyo.geometry, &identity).len(), 2);

    for region in &regions {
        assert_eq!(
            build_paths(&region.geometry, &identity).len(),
            region.geometry.ring_count()
        );
    }
}

#[test]
fn test_hole_is_kept_as_subpath() {
    let regions = mini_japan();
    let kanagawa = regions.iter().find(|r| r.id == KANAGAWA_ID).unwrap();
    let paths = build_paths(&kanagawa.geometry, &identity);

    assert_eq!(paths.len(), 2);
    assert!(paths[0].starts_with("M138.9 35.1"));
    assert!(paths[1].starts_with("M139.2 35.2"));
}

#[test]
fn test_path_uses_projector() {
    let ring = rect_ring(0.0, 0.0, 1.0, 1.0)
        .into_iter()
        .map(|[lon, lat]| map_common::Position::new(lon, lat))
        .collect::<Vec<_>>();
    let doubled = |lon: f64, lat: f64| (lon * 2.0 + 10.0, 100.0 - lat * 2.0);

    assert_eq!(
        ring_path(&ring, &doubled),
        "M10.0 100.0 L12.0 100.0 L12.0 98.0 L10.0 98.0 L10.0 100.0 Z"
    );
}
