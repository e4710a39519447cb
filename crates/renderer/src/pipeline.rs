//! End-to-end map rendering.
//!
//! ```text
//! regions + intensities
//!     -> view bounds (active regions, or whole dataset)
//!     -> fitted projection
//!     -> vector scene + labels
//!     -> raster + text
//!     -> PNG
//! ```
//!
//! Each call is a pure function of its inputs: the projection is built once
//! per call and nothing is shared between calls.

use map_common::{
    IntensityAssignment, IntensityEntry, MapError, MapResult, Region, SizeClass,
};
use projection::FittedProjection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::extent::resolve_view_bounds;
use crate::raster::{compute_labels, rasterize, Label, DEFAULT_FOOTER};
use crate::scene::{compose_scene, VectorScene};
use crate::style::MapStyle;
use crate::text::{FontPainter, FontSet, FontWeight, TextPainter};

/// Per-request rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub size: SizeClass,
    /// Caption drawn bottom-left. `None` uses [`DEFAULT_FOOTER`].
    pub footer: Option<String>,
    /// Draw the numeric level at the centroid of each active region.
    pub show_labels: bool,
    pub font_weight: FontWeight,
    pub style: MapStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: SizeClass::default(),
            footer: None,
            show_labels: false,
            font_weight: FontWeight::Regular,
            style: MapStyle::default(),
        }
    }
}

impl RenderOptions {
    pub fn footer_text(&self) -> &str {
        self.footer.as_deref().unwrap_or(DEFAULT_FOOTER)
    }
}

/// Everything needed to rasterize one map, before any pixels exist.
#[derive(Debug, Clone)]
pub struct PreparedMap {
    pub projection: FittedProjection,
    pub scene: VectorScene,
    /// Empty unless labels were requested.
    pub labels: Vec<Label>,
}

/// Fit the projection and compose the scene and labels.
pub fn prepare(
    regions: &[Region],
    intensities: &IntensityAssignment,
    options: &RenderOptions,
) -> MapResult<PreparedMap> {
    let width = options.size.width();
    let height = options.size.height();
    let multiplier = options.size.multiplier();

    let bounds = resolve_view_bounds(regions, intensities)?;
    let projection = FittedProjection::with_default_margin(&bounds, width as f64, height as f64)?;

    let scene = compose_scene(
        regions,
        intensities,
        &projection,
        width,
        height,
        multiplier,
        &options.style,
    );

    let labels = if options.show_labels {
        compute_labels(regions, intensities, &projection, options.style.label_offset)
    } else {
        Vec::new()
    };

    debug!(
        min_lon = bounds.min_lon,
        min_lat = bounds.min_lat,
        max_lon = bounds.max_lon,
        max_lat = bounds.max_lat,
        elements = scene.elements.len(),
        labels = labels.len(),
        "Prepared map"
    );

    Ok(PreparedMap {
        projection,
        scene,
        labels,
    })
}

/// Render a map with the given text painter.
#[instrument(skip_all, fields(size = ?options.size, active = intensities.active_count()))]
pub fn render_with_painter(
    regions: &[Region],
    intensities: &IntensityAssignment,
    options: &RenderOptions,
    painter: &dyn TextPainter,
) -> MapResult<Vec<u8>> {
    let prepared = prepare(regions, intensities, options)?;
    let png = rasterize(
        &prepared.scene,
        &prepared.labels,
        options.footer_text(),
        painter,
        &options.style,
        options.size.multiplier(),
    )?;

    info!(
        width = prepared.scene.width,
        height = prepared.scene.height,
        bytes = png.len(),
        "Rendered map"
    );
    Ok(png)
}

/// Render a map, drawing text with the requested weight from `fonts`.
pub fn render(
    regions: &[Region],
    intensities: &IntensityAssignment,
    options: &RenderOptions,
    fonts: &FontSet,
) -> MapResult<Vec<u8>> {
    let painter = FontPainter::from_set(fonts, options.font_weight);
    render_with_painter(regions, intensities, options, &painter)
}

/// Validate raw `{id, scale}` entries, then render.
///
/// An out-of-range scale fails here, before any geometry is touched.
pub fn render_entries(
    regions: &[Region],
    entries: &[IntensityEntry],
    options: &RenderOptions,
    painter: &dyn TextPainter,
) -> MapResult<Vec<u8>> {
    let intensities = IntensityAssignment::from_entries(entries)?;
    if regions.is_empty() {
        return Err(MapError::Dataset(
            "Geometry dataset contains no regions".to_string(),
        ));
    }
    render_with_painter(regions, &intensities, options, painter)
}
