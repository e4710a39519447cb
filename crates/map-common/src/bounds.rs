//! Geographic view bounds.

use serde::{Deserialize, Serialize};

/// Longitude/latitude extent of the part of the map that should be visible.
///
/// Coordinates are in degrees. A freshly created [`ViewBounds::empty`] is
/// deliberately inverted (min > max) so that the first extended point
/// collapses it onto that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl ViewBounds {
    /// Create bounds from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Inverted bounds covering nothing: min at +180/+90, max at -180/-90.
    pub fn empty() -> Self {
        Self::new(180.0, 90.0, -180.0, -90.0)
    }

    /// Widen the bounds so they include the given point.
    pub fn extend(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    /// True when no point has been added (min > max on either axis).
    pub fn is_inverted(&self) -> bool {
        self.min_lon > self.max_lon || self.min_lat > self.max_lat
    }

    /// Longitude span in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitude span in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Geographic center as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.max_lon + self.min_lon) / 2.0,
            (self.max_lat + self.min_lat) / 2.0,
        )
    }

    /// The four corners, clockwise from the north-west one.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.min_lon, self.max_lat),
            (self.max_lon, self.max_lat),
            (self.max_lon, self.min_lat),
            (self.min_lon, self.min_lat),
        ]
    }

    /// Check if a point is contained within these bounds (edges inclusive).
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_inverted() {
        let bounds = ViewBounds::empty();
        assert!(bounds.is_inverted());
        assert_eq!(bounds.min_lon, 180.0);
        assert_eq!(bounds.max_lat, -90.0);
    }

    #[test]
    fn test_extend_single_point_collapses() {
        let mut bounds = ViewBounds::empty();
        bounds.extend(139.7, 35.7);
        assert!(!bounds.is_inverted());
        assert_eq!(bounds.lon_span(), 0.0);
        assert_eq!(bounds.lat_span(), 0.0);
        assert_eq!(bounds.center(), (139.7, 35.7));
    }

    #[test]
    fn test_extend_widens_each_axis_independently() {
        let mut bounds = ViewBounds::empty();
        bounds.extend(130.0, 40.0);
        bounds.extend(140.0, 30.0);
        assert_eq!(bounds, ViewBounds::new(130.0, 30.0, 140.0, 40.0));
        assert!(bounds.contains_point(135.0, 35.0));
        assert!(!bounds.contains_point(141.0, 35.0));
    }
}
