//! Auto-fitted rectilinear projection.
//!
//! Given view bounds and a canvas size, the projection:
//! - shrinks the usable area by a margin on every side,
//! - shortens longitude distances by `cos(center latitude)`,
//! - picks the smaller of the two axis scales so the bounds fit without
//!   distortion (letterbox fit),
//! - centers the bounds on the canvas with Y pointing down.
//!
//! This is a flat local approximation, only accurate over narrow latitude
//! bands such as the Japanese archipelago.

use map_common::{MapError, ViewBounds};
use std::f64::consts::PI;

use crate::Projector;

/// Fraction of the canvas left empty on each side.
pub const DEFAULT_MARGIN: f64 = 0.1;

/// Smallest span, in degrees, used for either axis when computing scale.
/// Keeps single-point or zero-width bounds from dividing by zero.
pub const MIN_SPAN_DEGREES: f64 = 0.01;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProjectionError {
    #[error("Cannot fit projection to empty bounds")]
    EmptyBounds,

    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("Margin must be in [0, 0.5), got {0}")]
    InvalidMargin(f64),
}

impl From<ProjectionError> for MapError {
    fn from(err: ProjectionError) -> Self {
        MapError::Rendering(err.to_string())
    }
}

/// Immutable per-request projection context.
///
/// Built once from the view bounds and canvas size, then shared by reference
/// for every path vertex and label anchor of that request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedProjection {
    canvas_width: f64,
    canvas_height: f64,
    margin: f64,
    center_lon: f64,
    center_lat: f64,
    center_x: f64,
    center_y: f64,
    lon_correction: f64,
    scale: f64,
}

impl FittedProjection {
    /// Fit `bounds` into a `width` x `height` canvas with the given margin fraction.
    pub fn fit(
        bounds: &ViewBounds,
        width: f64,
        height: f64,
        margin: f64,
    ) -> Result<Self, ProjectionError> {
        if bounds.is_inverted() {
            return Err(ProjectionError::EmptyBounds);
        }
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ProjectionError::InvalidCanvas { width, height });
        }
        if !(0.0..0.5).contains(&margin) {
            return Err(ProjectionError::InvalidMargin(margin));
        }

        let effective_width = width * (1.0 - 2.0 * margin);
        let effective_height = height * (1.0 - 2.0 * margin);

        let (center_lon, center_lat) = bounds.center();
        let lon_correction = (center_lat * PI / 180.0).cos();

        let lon_span = (bounds.lon_span() * lon_correction).max(MIN_SPAN_DEGREES);
        let lat_span = bounds.lat_span().max(MIN_SPAN_DEGREES);

        let scale_x = effective_width / lon_span;
        let scale_y = effective_height / lat_span;
        let scale = scale_x.min(scale_y);

        tracing::debug!(
            center_lon,
            center_lat,
            lon_correction,
            scale,
            "Fitted projection"
        );

        Ok(Self {
            canvas_width: width,
            canvas_height: height,
            margin,
            center_lon,
            center_lat,
            center_x: width / 2.0,
            center_y: height / 2.0,
            lon_correction,
            scale,
        })
    }

    /// Fit with [`DEFAULT_MARGIN`].
    pub fn with_default_margin(
        bounds: &ViewBounds,
        width: f64,
        height: f64,
    ) -> Result<Self, ProjectionError> {
        Self::fit(bounds, width, height, DEFAULT_MARGIN)
    }

    /// Project geographic degrees to canvas pixels.
    pub fn to_screen(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = (lon - self.center_lon) * self.lon_correction * self.scale + self.center_x;
        let y = (self.center_lat - lat) * self.scale + self.center_y;
        (x, y)
    }

    /// Inverse of [`to_screen`](Self::to_screen).
    pub fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = (x - self.center_x) / (self.lon_correction * self.scale) + self.center_lon;
        let lat = self.center_lat - (y - self.center_y) / self.scale;
        (lon, lat)
    }

    /// Pixels per (latitude) degree.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn lon_correction(&self) -> f64 {
        self.lon_correction
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Geographic center of the fitted bounds as (lon, lat).
    pub fn geo_center(&self) -> (f64, f64) {
        (self.center_lon, self.center_lat)
    }

    /// Pixel center of the canvas as (x, y).
    pub fn pixel_center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    /// Margin-adjusted drawing rectangle as (min_x, min_y, max_x, max_y).
    pub fn drawing_area(&self) -> (f64, f64, f64, f64) {
        let mx = self.canvas_width * self.margin;
        let my = self.canvas_height * self.margin;
        (mx, my, self.canvas_width - mx, self.canvas_height - my)
    }
}

impl Projector for FittedProjection {
    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        self.to_screen(lon, lat)
    }
}
