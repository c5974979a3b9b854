//! Error types for sauvola-core
//!
//! Provides a unified error type for the raster containers. Each
//! variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// sauvola-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not match width * height
    #[error("data size mismatch: expected {expected} samples, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the image
    #[error("pixel ({x},{y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for sauvola-core operations
pub type Result<T> = std::result::Result<T, Error>;
