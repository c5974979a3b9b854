//! Sauvola adaptive thresholding
//!
//! Each pixel is binarized against a threshold derived from the local
//! mean and a local deviation estimate over a clamped square
//! neighborhood, with the window totals read from the integral images
//! in O(1) per pixel:
//!
//! ```text
//! threshold = mean * (1 + k * (std / 128 - 1))
//! ```
//!
//! Two contract points of this variant are preserved deliberately and
//! should not be "corrected":
//!
//! - The deviation estimate is built from the windowed sum of
//!   *square roots* of intensities, not the sum of squares, so it is
//!   a proxy rather than a true standard deviation.
//! - The half-radius is derived from the window *height* alone and
//!   applied to both axes, so the window width never affects the
//!   extent (it is still validated).
//!
//! Output polarity is inverted relative to plain thresholding: pixels
//! strictly below the local threshold become 255 (foreground), all
//! others 0.
//!
//! # See also
//!
//! Sauvola & Pietikäinen, "Adaptive document image binarization",
//! Pattern Recognition 33 (2000).

use crate::integral::integral_tables;
use crate::{BinarizeError, BinarizeResult};
use sauvola_core::{AccumImage, Error as CoreError, GrayImage};

/// Fixed dynamic range constant of the threshold formula.
const DYNAMIC_RANGE: f64 = 128.0;

/// Options for Sauvola binarization
#[derive(Debug, Clone)]
pub struct SauvolaOptions {
    /// Sensitivity factor, conventionally in (0, 1); not enforced
    pub k: f64,
    /// Window width (must be odd and positive)
    pub window_width: u32,
    /// Window height (must be odd and positive); also determines the
    /// half-radius used on both axes
    pub window_height: u32,
}

impl Default for SauvolaOptions {
    fn default() -> Self {
        Self {
            k: 0.1,
            window_width: 31,
            window_height: 31,
        }
    }
}

/// Validate that both window dimensions are odd positive integers.
fn check_window(options: &SauvolaOptions) -> BinarizeResult<()> {
    if options.window_width == 0
        || options.window_height == 0
        || options.window_width % 2 == 0
        || options.window_height % 2 == 0
    {
        return Err(BinarizeError::InvalidWindow {
            width: options.window_width,
            height: options.window_height,
        });
    }
    Ok(())
}

/// Validate that both integral tables match the image shape.
fn check_tables(
    img: &GrayImage,
    sum_table: &AccumImage,
    sqrt_table: &AccumImage,
) -> BinarizeResult<()> {
    let expected = (img.width(), img.height());
    for table in [sum_table, sqrt_table] {
        let actual = (table.width(), table.height());
        if actual != expected {
            return Err(CoreError::DimensionMismatch { expected, actual }.into());
        }
    }
    Ok(())
}

/// Read an integral table with a virtual row and column of zeros at
/// index -1. This collapses the four corner/edge/interior
/// inclusion-exclusion cases into one formula.
#[inline]
fn corner(table: &AccumImage, x: i64, y: i64) -> f64 {
    if x < 0 || y < 0 {
        0.0
    } else {
        table.get_pixel_unchecked(x as u32, y as u32)
    }
}

/// Total over the inclusive rectangle [x0,x1] x [y0,y1] via
/// inclusion-exclusion on an integral table.
#[inline]
fn window_total(table: &AccumImage, x0: u32, y0: u32, x1: u32, y1: u32) -> f64 {
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    corner(table, x1, y1) - corner(table, x0 - 1, y1) - corner(table, x1, y0 - 1)
        + corner(table, x0 - 1, y0 - 1)
}

/// Binarize an 8 bpp image with the Sauvola method.
///
/// Builds the two integral images internally, then thresholds every
/// pixel. The input is read-only; the result is a fresh image of the
/// same shape containing only the values 0 and 255.
///
/// # Errors
///
/// - `BinarizeError::InvalidWindow` if either window dimension is even
///   or zero (checked before any processing)
/// - `BinarizeError::DegenerateWindow` if a window clamps to a single
///   pixel (1x1 image, or a 1x1 window), which leaves the deviation
///   estimate undefined
/// - `BinarizeError::NumericDomain` if the deviation radicand leaves
///   the real domain
///
/// # Examples
///
/// ```
/// use sauvola_core::GrayImage;
/// use sauvola_binarize::{SauvolaOptions, sauvola_binarize};
///
/// let img = GrayImage::new_with_value(64, 64, 200).unwrap();
/// let bin = sauvola_binarize(&img, &SauvolaOptions::default()).unwrap();
/// assert_eq!(bin.get_pixel(32, 32).unwrap(), 0);
/// ```
pub fn sauvola_binarize(img: &GrayImage, options: &SauvolaOptions) -> BinarizeResult<GrayImage> {
    check_window(options)?;
    let (sum_table, sqrt_table) = integral_tables(img)?;
    threshold_pass(img, &sum_table, &sqrt_table, options)
}

/// Binarize with caller-supplied integral tables.
///
/// Same computation as [`sauvola_binarize`], for callers that build
/// the tables once via [`integral_tables`] and reuse them. Both tables
/// must match the image shape.
pub fn sauvola_binarize_with_tables(
    img: &GrayImage,
    sum_table: &AccumImage,
    sqrt_table: &AccumImage,
    options: &SauvolaOptions,
) -> BinarizeResult<GrayImage> {
    check_window(options)?;
    check_tables(img, sum_table, sqrt_table)?;
    threshold_pass(img, sum_table, sqrt_table, options)
}

/// The per-pixel threshold pass. Any error aborts the whole pass; no
/// partial output is returned.
fn threshold_pass(
    img: &GrayImage,
    sum_table: &AccumImage,
    sqrt_table: &AccumImage,
    options: &SauvolaOptions,
) -> BinarizeResult<GrayImage> {
    let w = img.width();
    let h = img.height();
    let whalf = options.window_height >> 1;

    let mut out = GrayImage::new(w, h)?;

    for y in 0..h {
        let y0 = y.saturating_sub(whalf);
        let y1 = (y + whalf).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(whalf);
            let x1 = (x + whalf).min(w - 1);

            let area = ((x1 - x0 + 1) as i64) * ((y1 - y0 + 1) as i64);
            if area <= 0 {
                return Err(BinarizeError::WindowAreaInvariant { x, y, area });
            }
            if area == 1 {
                return Err(BinarizeError::DegenerateWindow { x, y, area });
            }

            let wsum = window_total(sum_table, x0, y0, x1, y1);
            let wsqrt = window_total(sqrt_table, x0, y0, x1, y1);

            let area_f = area as f64;
            let mean = wsum / area_f;
            let radicand = (wsqrt - wsum.sqrt() / area_f) / (area_f - 1.0);
            if radicand < 0.0 || !radicand.is_finite() {
                return Err(BinarizeError::NumericDomain { x, y, radicand });
            }
            let std = radicand.sqrt();

            let threshold = mean * (1.0 + options.k * (std / DYNAMIC_RANGE - 1.0));
            let value = if (img.get_pixel_unchecked(x, y) as f64) < threshold {
                255
            } else {
                0
            };
            out.set_pixel_unchecked(x, y, value);
        }
    }

    Ok(out)
}
