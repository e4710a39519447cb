//! Visual constants for the prefecture map.

use serde::{Deserialize, Serialize};

/// How overlapping subpaths of one region are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    pub fn as_svg(&self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// Colors, widths and offsets used when drawing a map.
///
/// Sizes are given at 1x and multiplied by the size class multiplier at
/// render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    /// Canvas background fill.
    pub background: String,
    /// Region outline color.
    pub stroke: String,
    /// Region outline width at 1x.
    pub stroke_width: f64,
    /// Opacity applied to every region fill.
    pub fill_opacity: f64,
    pub fill_rule: FillRule,
    /// Label and footer color.
    pub text_color: String,
    /// Label and footer font size at 1x, in pixels.
    pub font_size: f32,
    /// Label baseline offset from the projected centroid, in pixels (not scaled).
    pub label_offset: (i32, i32),
    /// Footer baseline position from the bottom-left corner at 1x: (left, up).
    pub footer_offset: (f64, f64),
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: "#18181b".to_string(),
            stroke: "#a1a1aa".to_string(),
            stroke_width: 0.4,
            fill_opacity: 0.8,
            fill_rule: FillRule::NonZero,
            text_color: "#fafafa".to_string(),
            font_size: 14.0,
            label_offset: (-5, 5),
            footer_offset: (10.0, 14.0),
        }
    }
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
