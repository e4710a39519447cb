//! Font loading and text drawing.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use map_common::{MapError, MapResult};
use rusttype::{Font, Scale};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Font weight used for labels and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 400
    #[default]
    Regular,
    /// 500
    Medium,
}

impl FontWeight {
    /// Map a CSS numeric weight. Anything other than 500 is regular.
    pub fn from_numeric(weight: u16) -> Self {
        match weight {
            500 => FontWeight::Medium,
            _ => FontWeight::Regular,
        }
    }

    /// File name of this weight inside the font directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            FontWeight::Regular => "roboto-regular.ttf",
            FontWeight::Medium => "roboto-medium.ttf",
        }
    }
}

/// Parsed fonts for every supported weight.
///
/// Regular is required. Medium is optional and falls back to regular.
pub struct FontSet {
    regular: Font<'static>,
    medium: Option<Font<'static>>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("medium", &self.medium.is_some())
            .finish()
    }
}

impl FontSet {
    /// Parse fonts from raw TrueType bytes.
    pub fn from_bytes(regular: Vec<u8>, medium: Option<Vec<u8>>) -> MapResult<Self> {
        let regular = parse_font(regular, FontWeight::Regular)?;
        let medium = medium
            .map(|bytes| parse_font(bytes, FontWeight::Medium))
            .transpose()?;
        Ok(Self { regular, medium })
    }

    /// Load `roboto-regular.ttf` and, if present, `roboto-medium.ttf` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> MapResult<Self> {
        let dir = dir.as_ref();
        let regular = read_font_file(dir, FontWeight::Regular)?;

        let medium_path = dir.join(FontWeight::Medium.file_name());
        let medium = if medium_path.exists() {
            Some(read_font_file(dir, FontWeight::Medium)?)
        } else {
            warn!(path = %medium_path.display(), "Medium font not found, using regular");
            None
        };

        debug!(dir = %dir.display(), "Loaded fonts");
        Self::from_bytes(regular, medium)
    }

    /// Font for the requested weight.
    pub fn get(&self, weight: FontWeight) -> &Font<'static> {
        match weight {
            FontWeight::Medium => self.medium.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }
}

fn read_font_file(dir: &Path, weight: FontWeight) -> MapResult<Vec<u8>> {
    let path = dir.join(weight.file_name());
    std::fs::read(&path).map_err(|e| {
        MapError::Rendering(format!("failed to load font {}: {}", path.display(), e))
    })
}

fn parse_font(bytes: Vec<u8>, weight: FontWeight) -> MapResult<Font<'static>> {
    Font::try_from_vec(bytes).ok_or_else(|| {
        MapError::Rendering(format!("failed to parse font {}", weight.file_name()))
    })
}

/// Draws a run of text onto an image.
///
/// Positions are baselines: `x` is where the first glyph starts and `y` is
/// the baseline row.
pub trait TextPainter {
    fn draw_text(
        &self,
        image: &mut RgbaImage,
        text: &str,
        baseline: (i32, i32),
        size: f32,
        color: Rgba<u8>,
    ) -> MapResult<()>;
}

/// [`TextPainter`] backed by a TrueType font.
#[derive(Clone, Copy)]
pub struct FontPainter<'a> {
    font: &'a Font<'static>,
}

impl<'a> FontPainter<'a> {
    pub fn new(font: &'a Font<'static>) -> Self {
        Self { font }
    }

    /// Painter for one weight of a font set.
    pub fn from_set(fonts: &'a FontSet, weight: FontWeight) -> Self {
        Self::new(fonts.get(weight))
    }
}

impl TextPainter for FontPainter<'_> {
    fn draw_text(
        &self,
        image: &mut RgbaImage,
        text: &str,
        baseline: (i32, i32),
        size: f32,
        color: Rgba<u8>,
    ) -> MapResult<()> {
        if size.is_nan() || size <= 0.0 {
            return Err(MapError::Rendering(format!("invalid font size {}", size)));
        }
        let scale = Scale::uniform(size);
        // imageproc positions text by its top edge
        let ascent = self.font.v_metrics(scale).ascent;
        let top = baseline.1 - ascent.round() as i32;
        draw_text_mut(image, color, baseline.0, top, scale, self.font, text);
        Ok(())
    }
}
