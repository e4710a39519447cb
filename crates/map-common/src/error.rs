//! Error types for the prefecture map pipeline.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for map rendering requests.
///
/// Every failure is terminal for the request it occurred in; nothing is
/// retried and no partial image is produced.
#[derive(Debug, Error)]
pub enum MapError {
    // === Request Errors ===
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // === Data Errors ===
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid geometry: {0}")]
    GeometryShape(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Rendering(String),
}

impl MapError {
    /// Short, stable name of the error kind, suitable for log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            MapError::InvalidInput(_) => "invalid_input",
            MapError::Dataset(_) => "dataset",
            MapError::GeometryShape(_) => "geometry_shape",
            MapError::Rendering(_) => "rendering",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            MapError::InvalidInput(_) => 400,
            _ => 500,
        }
    }

    /// True when the caller, not the server, is at fault.
    pub fn is_client_error(&self) -> bool {
        self.http_status_code() < 500
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::Dataset(err.to_string())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Dataset(format!("JSON error: {}", err))
    }
}
