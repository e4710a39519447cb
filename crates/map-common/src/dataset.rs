//! GeoJSON loading for the prefecture geometry dataset.
//!
//! The dataset is a standard `FeatureCollection` where every feature carries a
//! numeric `id` property and a `Polygon` or `MultiPolygon` geometry. Parsing
//! is strict: a feature with a missing id or an unsupported geometry fails
//! the whole load rather than being skipped.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use crate::error::{MapError, MapResult};
use crate::region::{Geometry, Polygon, Position, Region, Ring};

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    #[serde(rename = "type")]
    type_: String,
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    coordinates: Value,
}

/// Immutable, ordered collection of regions.
///
/// Safe to share across concurrent requests behind an `Arc`; nothing mutates
/// it after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoDataset {
    regions: Vec<Region>,
}

impl GeoDataset {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Read and parse a GeoJSON file.
    pub fn load(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MapError::Dataset(format!("Failed to read geojson {}: {}", path.display(), e))
        })?;
        let dataset = Self::from_geojson_str(&content)?;
        debug!(path = %path.display(), regions = dataset.len(), "Loaded geometry dataset");
        Ok(dataset)
    }

    /// Parse a GeoJSON `FeatureCollection` held in memory.
    pub fn from_geojson_str(content: &str) -> MapResult<Self> {
        let raw: RawFeatureCollection = serde_json::from_str(content)
            .map_err(|e| MapError::Dataset(format!("Failed to unmarshal geojson: {}", e)))?;

        if raw.type_ != "FeatureCollection" {
            return Err(MapError::Dataset(format!(
                "Expected a FeatureCollection, got {}",
                raw.type_
            )));
        }

        let regions = raw
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| convert_feature(index, feature))
            .collect::<MapResult<Vec<_>>>()?;

        Ok(Self { regions })
    }

    /// All regions in dataset order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// First region with the given id.
    pub fn get(&self, id: i64) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn convert_feature(index: usize, feature: RawFeature) -> MapResult<Region> {
    let properties = feature.properties.unwrap_or_default();

    let id = properties
        .get("id")
        .and_then(numeric_id)
        .ok_or_else(|| {
            MapError::GeometryShape(format!("Invalid ID format in GeoJSON (feature {})", index))
        })?;

    let name = properties
        .get("name")
        .or_else(|| properties.get("nam_ja"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let raw_geometry = feature.geometry.ok_or_else(|| {
        MapError::GeometryShape(format!("Feature {} (id {}) has no geometry", index, id))
    })?;

    let geometry = match raw_geometry.type_.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Vec<f64>>> = coordinates(raw_geometry.coordinates, id)?;
            Geometry::Polygon(convert_polygon(rings, id)?)
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Vec<f64>>>> = coordinates(raw_geometry.coordinates, id)?;
            if polygons.is_empty() {
                return Err(MapError::GeometryShape(format!(
                    "MultiPolygon for id {} has no polygons",
                    id
                )));
            }
            Geometry::MultiPolygon(
                polygons
                    .into_iter()
                    .map(|rings| convert_polygon(rings, id))
                    .collect::<MapResult<Vec<_>>>()?,
            )
        }
        other => {
            return Err(MapError::GeometryShape(format!(
                "Unsupported geometry type {} for id {}",
                other, id
            )))
        }
    };

    Ok(Region { id, name, geometry })
}

/// Ids are JSON numbers; fractional values truncate toward zero.
fn numeric_id(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|v| v.is_finite()).map(|v| v as i64))
}

fn coordinates<T: serde::de::DeserializeOwned>(value: Value, id: i64) -> MapResult<T> {
    serde_json::from_value(value)
        .map_err(|e| MapError::GeometryShape(format!("Bad coordinates for id {}: {}", id, e)))
}

fn convert_polygon(rings: Vec<Vec<Vec<f64>>>, id: i64) -> MapResult<Polygon> {
    if rings.is_empty() {
        return Err(MapError::GeometryShape(format!(
            "Polygon for id {} has no rings",
            id
        )));
    }
    rings.into_iter().map(|ring| convert_ring(ring, id)).collect()
}

fn convert_ring(ring: Vec<Vec<f64>>, id: i64) -> MapResult<Ring> {
    if ring.is_empty() {
        return Err(MapError::GeometryShape(format!("Empty ring for id {}", id)));
    }
    ring.into_iter()
        .map(|coord| match coord.as_slice() {
            [lon, lat, ..] => Ok(Position::new(*lon, *lat)),
            _ => Err(MapError::GeometryShape(format!(
                "Position with fewer than 2 values for id {}",
                id
            ))),
        })
        .collect()
}
