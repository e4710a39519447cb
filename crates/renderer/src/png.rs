//! PNG encoding for RGBA image data.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when image has ≤256 unique colors.
//! - **RGBA PNG (color type 6)**: Fallback for images with >256 colors.
//!
//! Palettes are sorted before use so that identical pixels always encode to
//! identical bytes, whichever extraction path ran.

use map_common::{MapError, MapResult};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel palette extraction
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Create a PNG image with automatic format selection.
///
/// - If ≤256 unique colors: uses indexed PNG (smaller)
/// - Otherwise: uses RGBA PNG (full color)
pub fn create_png_auto(pixels: &[u8], width: usize, height: usize) -> MapResult<Vec<u8>> {
    check_len(pixels, width, height)?;

    match extract_palette(pixels) {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png(pixels, width, height),
    }
}

fn check_len(pixels: &[u8], width: usize, height: usize) -> MapResult<()> {
    if width == 0 || height == 0 || pixels.len() != width * height * 4 {
        return Err(MapError::Rendering(format!(
            "failed to encode png: {} bytes for a {}x{} RGBA image",
            pixels.len(),
            width,
            height
        )));
    }
    Ok(())
}

/// Pack RGBA bytes into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(px: &[u8]) -> u32 {
    u32::from_le_bytes([px[0], px[1], px[2], px[3]])
}

/// Unique colors and per-pixel palette indices, or `None` when the image
/// has more than [`MAX_PALETTE_SIZE`] colors.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let num_pixels = pixels.len() / 4;

    let unique = if num_pixels >= PARALLEL_THRESHOLD {
        unique_colors_parallel(pixels)?
    } else {
        unique_colors_sequential(pixels)?
    };

    let mut sorted: Vec<u32> = unique.into_iter().collect();
    sorted.sort_unstable();

    let color_to_index: HashMap<u32, u8> = sorted
        .iter()
        .enumerate()
        .map(|(i, packed)| (*packed, i as u8))
        .collect();

    let indices: Vec<u8> = if num_pixels >= PARALLEL_THRESHOLD {
        pixels
            .par_chunks_exact(4)
            .map(|px| color_to_index[&pack_color(px)])
            .collect()
    } else {
        pixels
            .chunks_exact(4)
            .map(|px| color_to_index[&pack_color(px)])
            .collect()
    };

    let palette = sorted.into_iter().map(u32::to_le_bytes).collect();
    Some((palette, indices))
}

fn unique_colors_sequential(pixels: &[u8]) -> Option<HashSet<u32>> {
    let mut colors = HashSet::with_capacity(MAX_PALETTE_SIZE);
    for px in pixels.chunks_exact(4) {
        colors.insert(pack_color(px));
        if colors.len() > MAX_PALETTE_SIZE {
            return None;
        }
    }
    Some(colors)
}

/// Collect unique colors per chunk on the rayon pool, then merge.
fn unique_colors_parallel(pixels: &[u8]) -> Option<HashSet<u32>> {
    let chunk_size = (pixels.len() / 4 / rayon::current_num_threads()).max(256) * 4;

    let partials: Vec<Option<HashSet<u32>>> = pixels
        .par_chunks(chunk_size)
        .map(unique_colors_sequential)
        .collect();

    let mut merged = HashSet::with_capacity(MAX_PALETTE_SIZE);
    for partial in partials {
        merged.extend(partial?);
        if merged.len() > MAX_PALETTE_SIZE {
            return None;
        }
    }
    Some(merged)
}

/// Create an indexed PNG (color type 3) from palette and indices.
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> MapResult<Vec<u8>> {
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE || indices.len() != width * height
    {
        return Err(MapError::Rendering(format!(
            "failed to encode png: {} palette entries, {} indices for {}x{}",
            palette.len(),
            indices.len(),
            width,
            height
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    // tRNS only when some entry is not fully opaque
    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width, height)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a PNG image from RGBA pixel data (color type 6).
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> MapResult<Vec<u8>> {
    check_len(pixels, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(pixels, width * 4, height)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Zlib-compress rows of `row_bytes` bytes, each prefixed with filter type 0.
fn deflate_scanlines(data: &[u8], row_bytes: usize, height: usize) -> MapResult<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in data.chunks_exact(row_bytes).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&uncompressed)
        .map_err(|e| MapError::Rendering(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| MapError::Rendering(format!("IDAT compression failed: {}", e)))
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
