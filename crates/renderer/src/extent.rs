//! View bounds calculation.

use map_common::{IntensityAssignment, MapError, MapResult, Region, ViewBounds};
use tracing::warn;

/// Bounds of every vertex of every region with a non-zero level.
///
/// Inactive regions are ignored entirely. When nothing is active the result
/// is [`ViewBounds::empty`], which is inverted; see [`resolve_view_bounds`].
pub fn compute_bounds(regions: &[Region], intensities: &IntensityAssignment) -> ViewBounds {
    let mut bounds = ViewBounds::empty();
    for region in regions {
        if !intensities.is_active(region.id) {
            continue;
        }
        for position in region.geometry.positions() {
            bounds.extend(position.lon, position.lat);
        }
    }
    bounds
}

/// Bounds of every vertex in the dataset, regardless of level.
pub fn dataset_bounds(regions: &[Region]) -> ViewBounds {
    let mut bounds = ViewBounds::empty();
    for position in regions.iter().flat_map(|r| r.geometry.positions()) {
        bounds.extend(position.lon, position.lat);
    }
    bounds
}

/// Bounds to fit the projection to.
///
/// Uses the active regions when there are any, otherwise the whole dataset.
/// An empty dataset has no usable bounds and is reported as a dataset error.
pub fn resolve_view_bounds(
    regions: &[Region],
    intensities: &IntensityAssignment,
) -> MapResult<ViewBounds> {
    let active = compute_bounds(regions, intensities);
    if !active.is_inverted() {
        return Ok(active);
    }

    warn!("No active regions, fitting view to the whole dataset");
    let all = dataset_bounds(regions);
    if all.is_inverted() {
        return Err(MapError::Dataset(
            "Geometry dataset contains no coordinates".to_string(),
        ));
    }
    Ok(all)
}
