// File: crates/chart-core/src/error.rs
// Summary: Library error type shared by loading, configuration and rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels back from surface")]
    ReadPixels,

    #[error("encode PNG failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("unsupported data file '{}' (expected .csv or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, ChartError>;
