//! sauvola-binarize - Sauvola adaptive thresholding via integral images
//!
//! This crate turns an 8 bpp grayscale raster into a binary (0/255)
//! raster using the Sauvola method: each pixel is compared against a
//! threshold derived from the mean and a deviation estimate of its
//! local neighborhood. Two summed area tables (intensity and
//! sqrt-intensity) give O(1) window statistics per pixel.
//!
//! Image decoding, display and color conversion are out of scope;
//! callers supply a [`sauvola_core::GrayImage`] and consume one.
//!
//! # Example
//!
//! ```
//! use sauvola_core::GrayImage;
//! use sauvola_binarize::{SauvolaOptions, sauvola_binarize};
//!
//! let img = GrayImage::new_with_value(64, 64, 200).unwrap();
//! let bin = sauvola_binarize(&img, &SauvolaOptions::default()).unwrap();
//! assert!(bin.data().iter().all(|&v| v == 0 || v == 255));
//! ```

mod error;
mod integral;
mod sauvola;

pub use error::{BinarizeError, BinarizeResult};
pub use integral::integral_tables;
pub use sauvola::{SauvolaOptions, sauvola_binarize, sauvola_binarize_with_tables};
