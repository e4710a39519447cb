//! Region geometry types.

use serde::{Deserialize, Serialize};

/// A single (longitude, latitude) vertex in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Ordered vertices of one boundary. Implicitly closed: the first and last
/// vertex describe the same location.
pub type Ring = Vec<Position>;

/// Exterior ring followed by any interior rings. Never empty.
pub type Polygon = Vec<Ring>;

/// Boundary geometry of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// All polygons of this geometry, in source order.
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(polygons) => polygons,
        }
    }

    /// Every ring of every polygon, flattened in source order.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons().iter().flatten()
    }

    /// Every vertex of every ring, flattened in source order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.rings().flatten()
    }

    /// Total number of rings across all polygons.
    pub fn ring_count(&self) -> usize {
        self.polygons().iter().map(Vec::len).sum()
    }

    /// The ring used to place this region's label: the first ring of the
    /// first polygon. For multi-polygons the other parts are ignored.
    pub fn label_ring(&self) -> Option<&Ring> {
        self.polygons().first().and_then(|polygon| polygon.first())
    }

    /// GeoJSON type name of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

/// One administrative unit (a prefecture) with a stable integer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    /// Display name when the dataset provides one.
    pub name: Option<String>,
    pub geometry: Geometry,
}

impl Region {
    pub fn new(id: i64, geometry: Geometry) -> Self {
        Self {
            id,
            name: None,
            geometry,
        }
    }
}
