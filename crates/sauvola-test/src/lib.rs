//! sauvola-test - Regression test support for the sauvola workspace
//!
//! Provides a small regression framework in the spirit of Leptonica's
//! regutils: a [`RegParams`] ledger that numbers comparisons, records
//! failures and prints a final verdict, plus synthetic raster
//! constructors. Test inputs are generated rather than loaded from
//! disk, since image decoding is an external collaborator for this
//! workspace.
//!
//! # Usage
//!
//! ```
//! use sauvola_test::{RegParams, uniform_gray};
//!
//! let mut rp = RegParams::new("demo");
//! let img = uniform_gray(8, 8, 200);
//! rp.compare_values(8.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use sauvola_core::GrayImage;

/// Create a uniform grayscale image filled with `value`
pub fn uniform_gray(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::new_with_value(width, height, value).expect("valid test dimensions")
}

/// Create a grayscale image with a horizontal left-to-right ramp
pub fn gradient_gray(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            let v = (x as u64 * 255 / (width.max(2) - 1) as u64) as u8;
            img.set_pixel_unchecked(x, y, v);
        }
    }
    img
}

/// Create a grayscale checkerboard with the given cell size
pub fn checker_gray(width: u32, height: u32, cell: u32, low: u8, high: u8) -> GrayImage {
    let cell = cell.max(1);
    let mut img = GrayImage::new(width, height).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            img.set_pixel_unchecked(x, y, if on { high } else { low });
        }
    }
    img
}
