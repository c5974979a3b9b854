//! sauvola-core - Raster containers for the sauvola binarization library
//!
//! This crate provides the fundamental data structures shared by the
//! rest of the workspace:
//!
//! - [`GrayImage`]: an 8-bit grayscale raster (row-major, unpadded)
//! - [`AccumImage`]: an f64 raster used for integral images
//! - [`Error`] / [`Result`]: the shared error type

mod accum;
mod error;
mod gray;

pub use accum::AccumImage;
pub use error::{Error, Result};
pub use gray::GrayImage;
