//! Per-region intensity levels supplied by the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{MapError, MapResult};

/// Highest valid intensity level.
pub const MAX_LEVEL: u8 = 7;

/// One `{id, scale}` pair as it arrives on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityEntry {
    pub id: i64,
    pub scale: i64,
}

impl IntensityEntry {
    pub fn new(id: i64, scale: i64) -> Self {
        Self { id, scale }
    }
}

/// Parse the JSON array form `[{"id":13,"scale":5}, ...]`.
pub fn parse_intensity_json(raw: &str) -> MapResult<Vec<IntensityEntry>> {
    serde_json::from_str(raw)
        .map_err(|e| MapError::InvalidInput(format!("Invalid scale data format: {}", e)))
}

/// Validated mapping from region id to intensity level.
///
/// Ids that were never assigned read as level 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntensityAssignment {
    levels: BTreeMap<i64, u8>,
}

impl IntensityAssignment {
    /// Assignment with every region at level 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assignment, rejecting any scale outside `0..=MAX_LEVEL`.
    ///
    /// Validation runs over the whole list before anything is returned;
    /// when an id repeats, the later entry wins.
    pub fn from_entries(entries: &[IntensityEntry]) -> MapResult<Self> {
        let mut levels = BTreeMap::new();
        for entry in entries {
            let level = u8::try_from(entry.scale)
                .ok()
                .filter(|level| *level <= MAX_LEVEL)
                .ok_or_else(|| {
                    MapError::InvalidInput(format!(
                        "Invalid scale value for ID {}: {}",
                        entry.id, entry.scale
                    ))
                })?;
            levels.insert(entry.id, level);
        }
        Ok(Self { levels })
    }

    /// Set one region's level, returning the builder for chaining.
    pub fn with_level(mut self, id: i64, level: u8) -> MapResult<Self> {
        if level > MAX_LEVEL {
            return Err(MapError::InvalidInput(format!(
                "Invalid scale value for ID {}: {}",
                id, level
            )));
        }
        self.levels.insert(id, level);
        Ok(self)
    }

    /// Level assigned to `id`, or 0 when absent.
    pub fn level(&self, id: i64) -> u8 {
        self.levels.get(&id).copied().unwrap_or(0)
    }

    /// True when `id` has a non-zero level.
    pub fn is_active(&self, id: i64) -> bool {
        self.level(id) > 0
    }

    /// Number of ids with a non-zero level.
    pub fn active_count(&self) -> usize {
        self.levels.values().filter(|level| **level > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
