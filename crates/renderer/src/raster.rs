//! Scene rasterization, text overlays and final encoding.
//!
//! The vector scene is parsed with usvg and drawn with resvg onto a
//! tiny-skia pixmap at the exact canvas size. Region labels and the footer
//! are then drawn on top, and the result is encoded as PNG.

use image::{Rgba, RgbaImage};
use map_common::{IntensityAssignment, MapError, MapResult, Region, Ring};
use projection::Projector;
use tracing::debug;

use crate::png::create_png_auto;
use crate::scene::VectorScene;
use crate::style::{hex_to_rgb, MapStyle};
use crate::text::TextPainter;

/// Footer used when the caller does not supply one.
pub const DEFAULT_FOOTER: &str = "Code available under the MIT License (GitHub: evacuate).";

/// A numeric intensity label and where its baseline starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub region_id: i64,
    pub text: String,
    pub baseline: (i32, i32),
}

/// Unweighted mean of a ring's vertices.
///
/// Every vertex counts once, including the closing repeat of the first.
pub fn ring_centroid(ring: &Ring) -> Option<(f64, f64)> {
    if ring.is_empty() {
        return None;
    }
    let count = ring.len() as f64;
    let (sum_lon, sum_lat) = ring
        .iter()
        .fold((0.0, 0.0), |(lon, lat), p| (lon + p.lon, lat + p.lat));
    Some((sum_lon / count, sum_lat / count))
}

/// Labels for every active region, in dataset order.
///
/// The anchor is the vertex mean of the first ring of the first polygon;
/// for multi-polygons the remaining parts do not move the label.
pub fn compute_labels<P: Projector + ?Sized>(
    regions: &[Region],
    intensities: &IntensityAssignment,
    projector: &P,
    offset: (i32, i32),
) -> Vec<Label> {
    regions
        .iter()
        .filter_map(|region| {
            let level = intensities.level(region.id);
            if level == 0 {
                return None;
            }
            let (lon, lat) = region.geometry.label_ring().and_then(ring_centroid)?;
            let (x, y) = projector.project(lon, lat);
            Some(Label {
                region_id: region.id,
                text: level.to_string(),
                baseline: (x as i32 + offset.0, y as i32 + offset.1),
            })
        })
        .collect()
}

/// Footer baseline for a canvas of `height`, offsets scaled by `multiplier`.
pub fn footer_baseline(height: u32, multiplier: f64, style: &MapStyle) -> (i32, i32) {
    let (left, up) = style.footer_offset;
    (
        (left * multiplier) as i32,
        height as i32 - (up * multiplier) as i32,
    )
}

/// Draw the vector scene into a straight-alpha RGBA buffer.
pub fn rasterize_scene(scene: &VectorScene) -> MapResult<RgbaImage> {
    let svg = scene.to_svg();

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &opt)
        .map_err(|e| MapError::Rendering(format!("failed to parse vector scene: {}", e)))?;

    let mut pixmap = tiny_skia::Pixmap::new(scene.width, scene.height).ok_or_else(|| {
        MapError::Rendering(format!(
            "failed to allocate {}x{} pixmap",
            scene.width, scene.height
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(scene.width, scene.height, data)
        .ok_or_else(|| MapError::Rendering("pixmap size mismatch".to_string()))
}

/// Draw labels then the footer onto `image`.
pub fn draw_overlays(
    image: &mut RgbaImage,
    labels: &[Label],
    footer: &str,
    painter: &dyn TextPainter,
    style: &MapStyle,
    multiplier: f64,
) -> MapResult<()> {
    let (r, g, b) = hex_to_rgb(&style.text_color).ok_or_else(|| {
        MapError::Rendering(format!("invalid text color {}", style.text_color))
    })?;
    let color = Rgba([r, g, b, 255]);
    let size = style.font_size * multiplier as f32;

    for label in labels {
        painter
            .draw_text(image, &label.text, label.baseline, size, color)
            .map_err(|e| MapError::Rendering(format!("failed to draw scale value: {}", e)))?;
    }

    let baseline = footer_baseline(image.height(), multiplier, style);
    painter
        .draw_text(image, footer, baseline, size, color)
        .map_err(|e| MapError::Rendering(format!("failed to draw footer text: {}", e)))?;

    Ok(())
}

/// Rasterize, overlay text and encode to PNG.
pub fn rasterize(
    scene: &VectorScene,
    labels: &[Label],
    footer: &str,
    painter: &dyn TextPainter,
    style: &MapStyle,
    multiplier: f64,
) -> MapResult<Vec<u8>> {
    let mut image = rasterize_scene(scene)?;
    draw_overlays(&mut image, labels, footer, painter, style, multiplier)?;

    let png = create_png_auto(image.as_raw(), scene.width as usize, scene.height as usize)?;
    debug!(
        width = scene.width,
        height = scene.height,
        labels = labels.len(),
        bytes = png.len(),
        "Rasterized map"
    );
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_common::Position;

    #[test]
    fn test_ring_centroid_counts_closing_vertex() {
        let ring = vec![
            Position::new(0.0, 0.0),
            Position::new(4.0, 0.0),
            Position::new(4.0, 4.0),
            Position::new(0.0, 0.0),
        ];
        let (lon, lat) = ring_centroid(&ring).unwrap();
        assert!((lon - 2.0).abs() < 1e-12);
        assert!((lat - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ring_centroid_empty() {
        assert_eq!(ring_centroid(&Vec::new()), None);
    }

    #[test]
    fn test_footer_baseline() {
        let style = MapStyle::default();
        assert_eq!(footer_baseline(720, 1.0, &style), (10, 706));
        assert_eq!(footer_baseline(2880, 4.0, &style), (40, 2824));
    }
}
