//! Intensity level to fill color mapping.

/// Fill color for each intensity level 0 through 7.
pub const INTENSITY_PALETTE: [&str; 8] = [
    "#27272a", // 0: inactive, dark gray
    "#bae6fd", // 1: pale cyan
    "#4ade80", // 2: green
    "#facc15", // 3: yellow
    "#f97316", // 4: orange
    "#dc2626", // 5: red
    "#86198f", // 6: magenta
    "#500724", // 7: deep maroon
];

/// Fallback for levels above 7.
const OVERFLOW_DARKEST: &str = "#4a044e";
/// Fallback tier below [`OVERFLOW_DARKEST`].
const OVERFLOW_SECOND: &str = "#b91c1c";

/// Fill color for an intensity level.
///
/// Levels outside 0..=7 never reach here once input is validated; they are
/// still mapped: above 6 to the darkest overflow color, above 5 to the
/// second tier, anything else (negative) to the inactive color.
pub fn color_of(level: i64) -> &'static str {
    match usize::try_from(level) {
        Ok(index) if index < INTENSITY_PALETTE.len() => INTENSITY_PALETTE[index],
        _ if level > 6 => OVERFLOW_DARKEST,
        _ if level > 5 => OVERFLOW_SECOND,
        _ => INTENSITY_PALETTE[0],
    }
}
