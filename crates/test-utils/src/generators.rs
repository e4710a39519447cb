//! Synthetic data generators for tests.
//!
//! Provides functions to generate geometry and pixel data without requiring
//! the real prefecture dataset.

use serde_json::{json, Value};

/// Closed axis-aligned rectangle ring as GeoJSON positions.
///
/// The ring runs counter-clockwise from the south-west corner and repeats
/// that corner at the end, giving 5 positions.
pub fn rect_ring(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Vec<[f64; 2]> {
    vec![
        [min_lon, min_lat],
        [max_lon, min_lat],
        [max_lon, max_lat],
        [min_lon, max_lat],
        [min_lon, min_lat],
    ]
}

/// Closed square ring with its south-west corner at (`lon`, `lat`).
pub fn square_ring(lon: f64, lat: f64, size: f64) -> Vec<[f64; 2]> {
    rect_ring(lon, lat, lon + size, lat + size)
}

/// A GeoJSON feature with a numeric `id` property.
pub fn polygon_feature(id: i64, rings: Vec<Vec<[f64; 2]>>) -> Value {
    json!({
        "type": "Feature",
        "properties": { "id": id },
        "geometry": { "type": "Polygon", "coordinates": rings }
    })
}

/// A GeoJSON multi-polygon feature with a numeric `id` property.
pub fn multipolygon_feature(id: i64, polygons: Vec<Vec<Vec<[f64; 2]>>>) -> Value {
    json!({
        "type": "Feature",
        "properties": { "id": id },
        "geometry": { "type": "MultiPolygon", "coordinates": polygons }
    })
}

/// Wrap features into a serialized `FeatureCollection`.
pub fn feature_collection(features: Vec<Value>) -> String {
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

/// A `cols` x `rows` grid of square regions with ids starting at 1.
///
/// Ids increase west to east, then south to north.
pub fn grid_feature_collection(
    cols: usize,
    rows: usize,
    origin: (f64, f64),
    cell_size: f64,
) -> String {
    let mut features = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let id = (row * cols + col + 1) as i64;
            let lon = origin.0 + col as f64 * cell_size;
            let lat = origin.1 + row as f64 * cell_size;
            features.push(polygon_feature(id, vec![square_ring(lon, lat, cell_size)]));
        }
    }
    feature_collection(features)
}

/// Creates a gradient RGBA pixel buffer with many unique colors.
pub fn create_test_rgba_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            pixels.extend_from_slice(&[r, g, 128, 255]);
        }
    }
    pixels
}

/// Creates RGBA pixels that use only the eight intensity colors, in
/// horizontal bands.
pub fn create_intensity_band_pixels(width: usize, height: usize) -> Vec<u8> {
    let palette: [(u8, u8, u8); 8] = [
        (0x27, 0x27, 0x2a),
        (0xba, 0xe6, 0xfd),
        (0x4a, 0xde, 0x80),
        (0xfa, 0xcc, 0x15),
        (0xf9, 0x73, 0x16),
        (0xdc, 0x26, 0x26),
        (0x86, 0x19, 0x8f),
        (0x50, 0x07, 0x24),
    ];
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let (r, g, b) = palette[(y * palette.len() / height.max(1)).min(palette.len() - 1)];
        for _ in 0..width {
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}
