//! Vector scene composition.
//!
//! Builds the full SVG document for a request: a background rectangle
//! followed by one path per region, in dataset order. Inactive regions are
//! drawn too, in the level 0 color.

use map_common::{IntensityAssignment, Region};
use projection::Projector;
use std::fmt::Write;

use crate::color::color_of;
use crate::path::{build_paths, join_subpaths};
use crate::style::MapStyle;

/// One region's drawable path and its style declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub region_id: i64,
    pub level: u8,
    /// All rings of the region as subpaths of a single path.
    pub path: String,
    /// CSS declarations for the SVG `style` attribute.
    pub style: String,
}

/// Complete vector description of one map.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorScene {
    pub width: u32,
    pub height: u32,
    /// Style of the full-canvas background rectangle.
    pub background_style: String,
    pub elements: Vec<SceneElement>,
}

impl VectorScene {
    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let path_bytes: usize = self.elements.iter().map(|e| e.path.len() + 64).sum();
        let mut svg = String::with_capacity(path_bytes + 256);

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{}" height="{}" style="{}"/>"#,
            self.width, self.height, self.background_style
        );
        for element in &self.elements {
            let _ = write!(
                svg,
                r#"<path d="{}" style="{}"/>"#,
                element.path, element.style
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Style declaration for a region filled with `fill`.
///
/// Stroke width is scaled by `multiplier` and written with one decimal.
pub fn region_style(fill: &str, style: &MapStyle, multiplier: f64) -> String {
    format!(
        "fill:{};stroke:{};stroke-width:{:.1};fill-opacity:{};fill-rule:{}",
        fill,
        style.stroke,
        style.stroke_width * multiplier,
        style.fill_opacity,
        style.fill_rule.as_svg()
    )
}

/// Compose the scene for every region.
pub fn compose_scene<P: Projector + ?Sized>(
    regions: &[Region],
    intensities: &IntensityAssignment,
    projector: &P,
    width: u32,
    height: u32,
    multiplier: f64,
    style: &MapStyle,
) -> VectorScene {
    let elements = regions
        .iter()
        .map(|region| {
            let level = intensities.level(region.id);
            let fill = color_of(level as i64);
            let paths = build_paths(&region.geometry, projector);
            SceneElement {
                region_id: region.id,
                level,
                path: join_subpaths(&paths),
                style: region_style(fill, style, multiplier),
            }
        })
        .collect();

    VectorScene {
        width,
        height,
        background_style: format!("fill:{}", style.background),
        elements,
    }
}
