//! Error types for sauvola-binarize
//!
//! Every failure here is a precondition or invariant violation; the
//! computation itself is pure and deterministic, so nothing is
//! retryable.

use thiserror::Error;

/// Errors that can occur during binarization
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sauvola_core::Error),

    /// Window dimensions must be odd positive integers
    #[error("invalid window size {width}x{height}: both dimensions must be odd and positive")]
    InvalidWindow { width: u32, height: u32 },

    /// Computed window area was non-positive; indicates a geometry bug
    /// and aborts the whole pass
    #[error("window area invariant violated at ({x},{y}): area = {area}")]
    WindowAreaInvariant { x: u32, y: u32, area: i64 },

    /// Window area too small for the local deviation estimate
    #[error("degenerate window at ({x},{y}): area {area} leaves no degrees of freedom")]
    DegenerateWindow { x: u32, y: u32, area: i64 },

    /// Local deviation radicand left the real domain
    #[error("numeric domain error at ({x},{y}): radicand = {radicand}")]
    NumericDomain { x: u32, y: u32, radicand: f64 },
}

/// Result type for binarization operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;
