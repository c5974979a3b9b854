//! Sauvola - adaptive binarization for grayscale rasters
//!
//! Computes a per-pixel binary threshold with the Sauvola method: each
//! pixel is compared against `mean * (1 + k * (std/128 - 1))`, where
//! mean and the deviation estimate come from the pixel's clamped local
//! window. Summed area tables make the window statistics O(1) per
//! pixel.
//!
//! Image file I/O and display are deliberately out of scope; callers
//! hand in a [`GrayImage`] and get a fresh 0/255 [`GrayImage`] back.
//!
//! # Example
//!
//! ```
//! use sauvola::{GrayImage, binarize::SauvolaOptions, binarize::sauvola_binarize};
//!
//! let img = GrayImage::new_with_value(64, 64, 200).unwrap();
//! let bin = sauvola_binarize(&img, &SauvolaOptions::default()).unwrap();
//! assert_eq!(bin.width(), 64);
//! assert!(bin.data().iter().all(|&v| v == 0 || v == 255));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use sauvola_core::*;

// Re-export the algorithm crate as a module
pub use sauvola_binarize as binarize;
