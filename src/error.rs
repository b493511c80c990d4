//! Error types for target construction and configuration.
//!
//! Geometry mutations and hit classification never fail: degenerate results
//! are dropped and sampling problems degrade to a miss. Only the boundaries
//! that ingest external data (target definitions, pixel buffers, settings
//! files) report errors.

use thiserror::Error;

/// Errors that can occur while building targets or loading settings
#[derive(Error, Debug)]
pub enum TargetError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Pixel buffer could not be decoded
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// Definition contains no content regions
    #[error("Target definition has no regions")]
    NoRegions,

    /// Content bounds are empty or not finite
    #[error("Invalid target size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    /// Region geometry is malformed
    #[error("Invalid region: {0}")]
    InvalidRegion(String),
}

/// Result type alias for target operations
pub type TargetResult<T> = Result<T, TargetError>;
