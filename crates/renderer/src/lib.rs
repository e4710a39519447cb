//! Prefecture intensity map rendering.
//!
//! Turns region geometry plus per-region intensity levels into a PNG:
//! - Color ramp for levels 0-7
//! - View bounds from the active regions
//! - SVG path building and scene composition
//! - Rasterization with resvg, text overlays with rusttype
//! - Indexed/RGBA PNG encoding

pub mod color;
pub mod extent;
pub mod path;
pub mod pipeline;
pub mod png;
pub mod raster;
pub mod scene;
pub mod style;
pub mod text;

pub use color::{color_of, INTENSITY_PALETTE};
pub use extent::{compute_bounds, dataset_bounds, resolve_view_bounds};
pub use pipeline::{prepare, render, render_entries, render_with_painter, PreparedMap, RenderOptions};
pub use raster::{Label, DEFAULT_FOOTER};
pub use scene::{compose_scene, SceneElement, VectorScene};
pub use style::{FillRule, MapStyle};
pub use text::{FontPainter, FontSet, FontWeight, TextPainter};
