//! Error types for globelens.

use thiserror::Error;

/// The main error type for globelens operations.
///
/// Expected per-frame conditions (raster not yet loaded, pointer off the
/// globe, absent cache key, unknown descriptor id) are *not* errors; they
/// degrade to sentinel values or no-ops. This type covers the setup paths
/// only: asset decoding and metadata ingestion.
#[derive(Error, Debug)]
pub enum GlobelensError {
    /// Failed to decode a baked identifier raster image.
    #[error("raster decode error: {0}")]
    Raster(#[from] image::ImageError),

    /// A raw pixel buffer does not match the declared raster dimensions.
    #[error("raster size mismatch: expected {expected} bytes, got {actual}")]
    RasterSizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for globelens operations.
pub type Result<T> = std::result::Result<T, GlobelensError>;
