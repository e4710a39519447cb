//! Output canvas size classes.

use serde::{Deserialize, Serialize};

/// Base canvas width at 1x.
pub const BASE_WIDTH: u32 = 1280;
/// Base canvas height at 1x.
pub const BASE_HEIGHT: u32 = 720;

/// Requested output resolution, expressed as a multiple of 1280x720.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeClass {
    /// 1280x720
    #[default]
    X1,
    /// 2560x1440
    X2,
    /// 5120x2880
    X4,
}

impl SizeClass {
    /// Parse the `size` query value. `"1"`, `"2"` and `"3"` select 1x, 2x
    /// and 4x; anything else, including nothing, falls back to 1x.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("2") => SizeClass::X2,
            Some("3") => SizeClass::X4,
            _ => SizeClass::X1,
        }
    }

    /// Scale factor applied to canvas size, stroke width and text size.
    pub fn multiplier(&self) -> f64 {
        match self {
            SizeClass::X1 => 1.0,
            SizeClass::X2 => 2.0,
            SizeClass::X4 => 4.0,
        }
    }

    pub fn width(&self) -> u32 {
        (BASE_WIDTH as f64 * self.multiplier()) as u32
    }

    pub fn height(&self) -> u32 {
        (BASE_HEIGHT as f64 * self.multiplier()) as u32
    }
}
