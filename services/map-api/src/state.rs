//! Application state and shared resources.

use map_common::{GeoDataset, MapResult};
use renderer::{FontSet, FontWeight};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::metrics::MetricsCollector;

/// Where region geometry comes from for each request.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Parsed once and shared.
    Cached(Arc<GeoDataset>),
    /// Re-read from disk on every request.
    OnDemand(PathBuf),
}

impl DatasetSource {
    pub fn dataset(&self) -> MapResult<Arc<GeoDataset>> {
        match self {
            DatasetSource::Cached(dataset) => Ok(Arc::clone(dataset)),
            DatasetSource::OnDemand(path) => GeoDataset::load(path).map(Arc::new),
        }
    }
}

/// Shared application state.
///
/// Everything here is read-only after startup, so requests share it without
/// locking.
#[derive(Debug)]
pub struct AppState {
    pub dataset: DatasetSource,
    pub fonts: FontSet,
    pub font_weight: FontWeight,
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    pub fn new(dataset: DatasetSource, fonts: FontSet, font_weight: FontWeight) -> Self {
        Self {
            dataset,
            fonts,
            font_weight,
            metrics: Arc::new(MetricsCollector::new()),
        }
    }

    /// Load fonts and, when caching is enabled, the dataset.
    ///
    /// Both fail fast so a misconfigured server never starts.
    pub fn from_config(config: &Config) -> MapResult<Self> {
        let fonts = FontSet::load_dir(&config.font_dir)?;

        let dataset = if config.cache_dataset {
            let dataset = GeoDataset::load(&config.geojson)?;
            info!(
                path = %config.geojson.display(),
                regions = dataset.len(),
                "Cached geometry dataset"
            );
            DatasetSource::Cached(Arc::new(dataset))
        } else {
            info!(path = %config.geojson.display(), "Dataset will be read per request");
            DatasetSource::OnDemand(config.geojson.clone())
        };

        Ok(Self::new(
            dataset,
            fonts,
            FontWeight::from_numeric(config.font_weight),
        ))
    }
}
