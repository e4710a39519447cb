//! Common test fixtures.
//!
//! A miniature stand-in for the 47-prefecture dataset: five regions with
//! rectangular boundaries that still exercise every geometry shape the
//! renderer has to handle (plain polygon, polygon with a hole, multi-polygon
//! whose first part is not its largest).

use serde_json::json;

use crate::generators::{feature_collection, multipolygon_feature, polygon_feature, rect_ring};

/// Region ids present in [`mini_japan_geojson`], in dataset order.
pub const MINI_JAPAN_IDS: [i64; 5] = [1, 13, 14, 27, 47];

pub const HOKKAIDO_ID: i64 = 1;
pub const TOKYO_ID: i64 = 13;
pub const KANAGAWA_ID: i64 = 14;
pub const OSAKA_ID: i64 = 27;
pub const OKINAWA_ID: i64 = 47;

/// Expected bounds (min_lon, min_lat, max_lon, max_lat) per region.
pub mod bounds {
    pub const HOKKAIDO: (f64, f64, f64, f64) = (139.8, 41.4, 145.8, 45.6);
    /// Mainland plus the southern island group.
    pub const TOKYO: (f64, f64, f64, f64) = (138.9, 33.0, 139.9, 35.9);
    pub const KANAGAWA: (f64, f64, f64, f64) = (138.9, 35.1, 139.8, 35.5);
    pub const OSAKA: (f64, f64, f64, f64) = (135.1, 34.3, 135.7, 34.9);
    pub const OKINAWA: (f64, f64, f64, f64) = (127.6, 26.0, 128.3, 26.9);
    /// Union of every region above.
    pub const ALL: (f64, f64, f64, f64) = (127.6, 26.0, 145.8, 45.6);
}

/// Five-region FeatureCollection shaped like a tiny Japan.
pub fn mini_japan_geojson() -> String {
    feature_collection(vec![
        multipolygon_feature(
            HOKKAIDO_ID,
            vec![
                vec![rect_ring(140.0, 41.4, 145.8, 45.4)],
                vec![rect_ring(139.8, 45.3, 140.1, 45.6)],
            ],
        ),
        multipolygon_feature(
            TOKYO_ID,
            vec![
                vec![rect_ring(138.9, 35.5, 139.9, 35.9)],
                vec![rect_ring(139.3, 33.0, 139.5, 33.2)],
            ],
        ),
        polygon_feature(
            KANAGAWA_ID,
            vec![
                rect_ring(138.9, 35.1, 139.8, 35.5),
                rect_ring(139.2, 35.2, 139.4, 35.3),
            ],
        ),
        polygon_feature(OSAKA_ID, vec![rect_ring(135.1, 34.3, 135.7, 34.9)]),
        polygon_feature(OKINAWA_ID, vec![rect_ring(127.6, 26.0, 128.3, 26.9)]),
    ])
}

/// A collection whose only feature has a string id.
pub fn geojson_with_string_id() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "id": "13" },
            "geometry": { "type": "Polygon", "coordinates": [rect_ring(0.0, 0.0, 1.0, 1.0)] }
        }]
    })
    .to_string()
}

/// A collection whose only feature has no properties at all.
pub fn geojson_without_id() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [rect_ring(0.0, 0.0, 1.0, 1.0)] }
        }]
    })
    .to_string()
}

/// A collection containing a `Point` geometry, which regions cannot use.
pub fn geojson_with_point() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "id": 5 },
            "geometry": { "type": "Point", "coordinates": [139.0, 35.0] }
        }]
    })
    .to_string()
}

/// Sample `scale` query payloads.
pub mod queries {
    pub const TOKYO_5: &str = r#"[{"id":13,"scale":5}]"#;
    pub const EMPTY: &str = "[]";
    pub const OUT_OF_RANGE: &str = r#"[{"id":13,"scale":9}]"#;
    pub const NEGATIVE: &str = r#"[{"id":13,"scale":-1}]"#;
    pub const MALFORMED: &str = r#"[{"id":13,"scale":"#;
}
