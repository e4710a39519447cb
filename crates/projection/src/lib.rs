//! Coordinate transforms from geographic degrees to canvas pixels.
//!
//! Implements the single projection the map needs from scratch: a local
//! equirectangular fit with a cosine longitude correction, auto-scaled so a
//! set of bounds fills the canvas minus a margin.

pub mod fitted;

pub use fitted::{FittedProjection, ProjectionError, DEFAULT_MARGIN, MIN_SPAN_DEGREES};

/// Anything that maps (lon, lat) in degrees to (x, y) in pixels.
///
/// Implemented by [`FittedProjection`] and by any matching closure, so path
/// building can be tested against trivial transforms.
pub trait Projector {
    fn project(&self, lon: f64, lat: f64) -> (f64, f64);
}

impl<F> Projector for F
where
    F: Fn(f64, f64) -> (f64, f64),
{
    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        self(lon, lat)
    }
}
