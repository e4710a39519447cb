//! Command line and environment configuration.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Prefecture map server
#[derive(Parser, Debug, Clone)]
#[command(name = "map-api")]
#[command(about = "Renders prefecture intensity maps as PNG over HTTP")]
pub struct Config {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "LISTEN_ADDR")]
    pub listen: String,

    /// GeoJSON FeatureCollection of prefecture boundaries
    #[arg(long, default_value = "japan.geojson", env = "GEOJSON_PATH")]
    pub geojson: PathBuf,

    /// Directory containing roboto-regular.ttf and roboto-medium.ttf
    #[arg(long, default_value = "./fonts", env = "FONT_DIR")]
    pub font_dir: PathBuf,

    /// Font weight for labels and footer (400 or 500)
    #[arg(long, default_value_t = 400, env = "FONT_WEIGHT")]
    pub font_weight: u16,

    /// Log level
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Parse the dataset once at startup instead of on every request
    #[arg(long, default_value_t = true, action = ArgAction::Set, env = "CACHE_DATASET")]
    pub cache_dataset: bool,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "TOKIO_WORKER_THREADS")]
    pub worker_threads: Option<usize>,
}
