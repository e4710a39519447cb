//! Common types shared across the prefecture map workspace.

pub mod bounds;
pub mod dataset;
pub mod error;
pub mod intensity;
pub mod region;
pub mod size;

pub use bounds::ViewBounds;
pub use dataset::GeoDataset;
pub use error::{MapError, MapResult};
pub use intensity::{parse_intensity_json, IntensityAssignment, IntensityEntry, MAX_LEVEL};
pub use region::{Geometry, Polygon, Position, Region, Ring};
pub use size::{SizeClass, BASE_HEIGHT, BASE_WIDTH};
