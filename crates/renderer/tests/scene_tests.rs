//! Tests for color assignment and vector scene composition.

use map_common::{parse_intensity_json, GeoDataset, IntensityAssignment, Region, SizeClass};
use renderer::color::{color_of, INTENSITY_PALETTE};
use renderer::pipeline::{prepare, RenderOptions};
use renderer::scene::compose_scene;
use renderer::style::{FillRule, MapStyle};
use test_utils::{mini_japan_geojson, queries, MINI_JAPAN_IDS, TOKYO_ID};

fn mini_japan() -> Vec<Region> {
    GeoDataset::from_geojson_str(&mini_japan_geojson())
        .unwrap()
        .regions()
        .to_vec()
}

fn fill_of(style: &str) -> &str {
    style
        .split(';')
        .find_map(|decl| decl.strip_prefix("fill:"))
        .unwrap()
}

// ============================================================================
// Color ramp tests
// ============================================================================

#[test]
fn test_every_level_has_fixed_color() {
    let expected = [
        "#27272a", "#bae6fd", "#4ade80", "#facc15", "#f97316", "#dc2626", "#86198f", "#500724",
    ];
    for (level, color) in expected.iter().enumerate() {
        assert_eq!(color_of(level as i64), *color, "level {}", level);
        assert_eq!(INTENSITY_PALETTE[level], *color);
    }
}

#[test]
fn test_levels_above_range_use_fallback() {
    for level in [8, 9, 100] {
        assert_eq!(color_of(level), "#4a044e");
    }
}

// ============================================================================
// Scene tests
// ============================================================================

#[test]
fn test_tokyo_scenario_colors() {
    let regions = mini_japan();
    let entries = parse_intensity_json(queries::TOKYO_5).unwrap();
    let intensities = IntensityAssignment::from_entries(&entries).unwrap();

    let prepared = prepare(&regions, &intensities, &RenderOptions::default()).unwrap();

    assert_eq!(prepared.scene.width, 1280);
    assert_eq!(prepared.scene.height, 720);
    assert_eq!(prepared.scene.elements.len(), MINI_JAPAN_IDS.len());

    for element in &prepared.scene.elements {
        let expected = if element.region_id == TOKYO_ID {
            "#dc2626"
        } else {
            "#27272a"
        };
        assert_eq!(fill_of(&element.style), expected, "region {}", element.region_id);
    }
}

#[test]
fn test_elements_follow_dataset_order() {
    let regions = mini_japan();
    let prepared = prepare(&regions, &IntensityAssignment::new(), &RenderOptions::default())
        .unwrap();
    let ids: Vec<i64> = prepared.scene.elements.iter().map(|e| e.region_id).collect();
    assert_eq!(ids, MINI_JAPAN_IDS.to_vec());
}

#[test]
fn test_stroke_width_scales_with_size() {
    let regions = mini_japan();
    let options = RenderOptions {
        size: SizeClass::X4,
        ..RenderOptions::default()
    };
    let prepared = prepare(&regions, &IntensityAssignment::new(), &options).unwrap();

    assert_eq!(prepared.scene.width, 5120);
    assert_eq!(prepared.scene.height, 2880);
    assert!(prepared
        .scene
        .elements
        .iter()
        .all(|e| e.style.contains("stroke-width:1.6")));
}

#[test]
fn test_multipolygon_is_one_element_with_subpaths() {
    let regions = mini_japan();
    let identity = |lon: f64, lat: f64| (lon, lat);
    let scene = compose_scene(
        &regions,
        &IntensityAssignment::new(),
        &identity,
        100,
        100,
        1.0,
        &MapStyle::default(),
    );

    let tokyo = scene
        .elements
        .iter()
        .find(|e| e.region_id == TOKYO_ID)
        .unwrap();
    assert_eq!(tokyo.path.matches('M').count(), 2);
    assert_eq!(tokyo.path.matches('Z').count(), 2);
}

#[test]
fn test_svg_document_structure() {
    let regions = mini_japan();
    let intensities = IntensityAssignment::new().with_level(TOKYO_ID, 5).unwrap();
    let prepared = prepare(&regions, &intensities, &RenderOptions::default()).unwrap();
    let svg = prepared.scene.to_svg();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1280" height="720""#));
    assert!(svg.contains(r#"<rect x="0" y="0" width="1280" height="720" style="fill:#18181b"/>"#));
    assert_eq!(svg.matches("<path ").count(), MINI_JAPAN_IDS.len());
    assert!(svg.contains("fill-rule:nonzero"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_fill_rule_can_be_pinned_to_evenodd() {
    let regions = mini_japan();
    let options = RenderOptions {
        style: MapStyle {
            fill_rule: FillRule::EvenOdd,
            ..MapStyle::default()
        },
        ..RenderOptions::default()
    };
    let prepared = prepare(&regions, &IntensityAssignment::new(), &options).unwrap();
    assert!(prepared
        .scene
        .elements
        .iter()
        .all(|e| e.style.ends_with("fill-rule:evenodd")));
}
