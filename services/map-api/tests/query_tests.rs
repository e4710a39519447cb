//! Tests for `/map` query validation.
//!
//! Validation is a pure function, so none of these need fonts or geometry.

use map_api::handlers::{parse_map_query, MapQueryParams};
use map_common::{MapError, SizeClass};
use test_utils::{queries, TOKYO_ID};

fn query(scale: &str) -> MapQueryParams {
    MapQueryParams {
        scale: Some(scale.to_string()),
        ..MapQueryParams::default()
    }
}

// ============================================================================
// scale
// ============================================================================

#[test]
fn test_valid_scale() {
    let request = parse_map_query(&query(queries::TOKYO_5)).unwrap();
    assert_eq!(request.intensities.level(TOKYO_ID), 5);
    assert_eq!(request.intensities.active_count(), 1);
}

#[test]
fn test_missing_scale_is_bad_request() {
    let err = parse_map_query(&MapQueryParams::default()).unwrap_err();
    assert!(matches!(err, MapError::InvalidInput(_)));
    assert_eq!(err.http_status_code(), 400);
}

#[test]
fn test_malformed_scale_is_bad_request() {
    let err = parse_map_query(&query(queries::MALFORMED)).unwrap_err();
    assert!(matches!(err, MapError::InvalidInput(_)));
    assert!(err.to_string().contains("Invalid scale data format"));
}

#[test]
fn test_scale_not_an_array() {
    let err = parse_map_query(&query(r#"{"id":13,"scale":5}"#)).unwrap_err();
    assert!(matches!(err, MapError::InvalidInput(_)));
}

#[test]
fn test_out_of_range_scale_names_id_and_value() {
    let err = parse_map_query(&query(queries::OUT_OF_RANGE)).unwrap_err();
    assert_eq!(err.http_status_code(), 400);
    assert!(err.to_string().contains("Invalid scale value for ID 13: 9"));

    let err = parse_map_query(&query(queries::NEGATIVE)).unwrap_err();
    assert!(err.to_string().contains("Invalid scale value for ID 13: -1"));
}

#[test]
fn test_boundary_levels_accepted() {
    let request = parse_map_query(&query(r#"[{"id":1,"scale":0},{"id":2,"scale":7}]"#)).unwrap();
    assert_eq!(request.intensities.level(1), 0);
    assert_eq!(request.intensities.level(2), 7);
}

#[test]
fn test_duplicate_id_last_wins() {
    let request =
        parse_map_query(&query(r#"[{"id":13,"scale":2},{"id":13,"scale":6}]"#)).unwrap();
    assert_eq!(request.intensities.level(13), 6);
}

// ============================================================================
// size, footer, scale_text
// ============================================================================

#[test]
fn test_size_mapping() {
    for (value, expected) in [
        (Some("1"), SizeClass::X1),
        (Some("2"), SizeClass::X2),
        (Some("3"), SizeClass::X4),
        (Some("4"), SizeClass::X1),
        (Some("big"), SizeClass::X1),
        (None, SizeClass::X1),
    ] {
        let params = MapQueryParams {
            size: value.map(str::to_string),
            ..query(queries::EMPTY)
        };
        assert_eq!(parse_map_query(&params).unwrap().options.size, expected, "{:?}", value);
    }
}

#[test]
fn test_footer() {
    let params = MapQueryParams {
        footer: Some("Data: JMA".to_string()),
        ..query(queries::EMPTY)
    };
    let request = parse_map_query(&params).unwrap();
    assert_eq!(request.options.footer_text(), "Data: JMA");

    let params = MapQueryParams {
        footer: Some(String::new()),
        ..query(queries::EMPTY)
    };
    let request = parse_map_query(&params).unwrap();
    assert_eq!(request.options.footer_text(), renderer::DEFAULT_FOOTER);
}

#[test]
fn test_scale_text_must_be_exactly_true() {
    for (value, expected) in [
        (Some("true"), true),
        (Some("TRUE"), false),
        (Some("1"), false),
        (None, false),
    ] {
        let params = MapQueryParams {
            scale_text: value.map(str::to_string),
            ..query(queries::EMPTY)
        };
        assert_eq!(parse_map_query(&params).unwrap().options.show_labels, expected);
    }
}
