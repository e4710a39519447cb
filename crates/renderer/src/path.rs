//! Polygon geometry to SVG path data.
//!
//! Every ring becomes one closed subpath: a move to the first projected
//! vertex, a line to each following vertex, then a close. Vertices are kept
//! exactly as given, including the repeated closing vertex, and ring order
//! and winding are preserved.

use map_common::{Geometry, Ring};
use projection::Projector;
use std::fmt::Write;

/// Path data for one ring, coordinates rounded to one decimal.
///
/// An empty ring yields an empty string.
pub fn ring_path<P: Projector + ?Sized>(ring: &Ring, projector: &P) -> String {
    let mut path = String::with_capacity(ring.len() * 16 + 2);
    for (i, position) in ring.iter().enumerate() {
        let (x, y) = projector.project(position.lon, position.lat);
        if i == 0 {
            let _ = write!(path, "M{:.1} {:.1}", x, y);
        } else {
            let _ = write!(path, " L{:.1} {:.1}", x, y);
        }
    }
    if !path.is_empty() {
        path.push_str(" Z");
    }
    path
}

/// One path per ring, across every polygon of the geometry.
pub fn build_paths<P: Projector + ?Sized>(geometry: &Geometry, projector: &P) -> Vec<String> {
    geometry
        .rings()
        .map(|ring| ring_path(ring, projector))
        .filter(|path| !path.is_empty())
        .collect()
}

/// Concatenate ring paths into a single multi-subpath path.
pub fn join_subpaths(paths: &[String]) -> String {
    paths.join(" ")
}

/// Number of vertices (move and line commands) in path data.
pub fn vertex_count(path: &str) -> usize {
    path.chars().filter(|c| *c == 'M' || *c == 'L').count()
}
