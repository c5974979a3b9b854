//! Integral image construction for Sauvola thresholding
//!
//! Builds two summed area tables over an 8 bpp image in a single
//! sequential sweep: one accumulating the raw intensities and one
//! accumulating `sqrt(intensity)`. Each table entry (x, y) holds the
//! total over the rectangle from (0, 0) to (x, y) inclusive, so any
//! rectangular window total can later be recovered in O(1) by
//! inclusion-exclusion.
//!
//! The sweep is row-major: within a row a running horizontal sum is
//! maintained (reset at the start of each row), and the table value is
//! that running sum plus the table value directly above. Rows carry
//! vertically, so the pass cannot be split across rows.
//!
//! The sqrt table is *not* a sum-of-squares table. The deviation
//! estimate downstream is defined over square roots; see
//! [`crate::sauvola`].

use crate::BinarizeResult;
use sauvola_core::{AccumImage, GrayImage};

/// Build the intensity and sqrt-intensity integral images.
///
/// Returns `(sum_table, sqrt_sum_table)`, both the same shape as the
/// input. Accumulation is in f64, which keeps the intensity sums exact
/// (they stay far below 2^53 for any realistic raster) and gives the
/// sqrt sums full double precision.
///
/// # Examples
///
/// ```
/// use sauvola_core::GrayImage;
/// use sauvola_binarize::integral_tables;
///
/// let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
/// let (sum, _) = integral_tables(&img).unwrap();
/// // bottom-right entry covers the whole image
/// assert_eq!(sum.get_pixel(1, 1).unwrap(), 10.0);
/// ```
pub fn integral_tables(img: &GrayImage) -> BinarizeResult<(AccumImage, AccumImage)> {
    let w = img.width();
    let h = img.height();

    let mut sum_table = AccumImage::new(w, h)?;
    let mut sqrt_table = AccumImage::new(w, h)?;

    for y in 0..h {
        let mut row_sum = 0.0f64;
        let mut row_sqrt_sum = 0.0f64;
        for x in 0..w {
            let v = img.get_pixel_unchecked(x, y) as f64;
            row_sum += v;
            row_sqrt_sum += v.sqrt();

            if y == 0 {
                sum_table.set_pixel_unchecked(x, y, row_sum);
                sqrt_table.set_pixel_unchecked(x, y, row_sqrt_sum);
            } else {
                let above = sum_table.get_pixel_unchecked(x, y - 1);
                let sqrt_above = sqrt_table.get_pixel_unchecked(x, y - 1);
                sum_table.set_pixel_unchecked(x, y, row_sum + above);
                sqrt_table.set_pixel_unchecked(x, y, row_sqrt_sum + sqrt_above);
            }
        }
    }

    Ok((sum_table, sqrt_table))
}
