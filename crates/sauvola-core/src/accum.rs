//! AccumImage - f64 accumulator raster
//!
//! `AccumImage` is a 2D array of `f64` values used for integral images
//! (summed area tables). Full f64 precision keeps integer sums exact
//! up to 2^53 and avoids the rounding drift that accumulates when
//! large running totals are stored in f32 (24-bit mantissa).

use crate::error::{Error, Result};

/// Floating-point accumulator image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The value at
/// (x, y) is at index `y * width + x`.
#[derive(Debug, Clone)]
pub struct AccumImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Accumulator data (row-major, no padding)
    data: Vec<f64>,
}

impl AccumImage {
    /// Create a new AccumImage with all values set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use sauvola_core::AccumImage;
    ///
    /// let acc = AccumImage::new(64, 64).unwrap();
    /// assert_eq!(acc.get_pixel(0, 0).unwrap(), 0.0);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(AccumImage {
            width,
            height,
            data: vec![0.0f64; size],
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a value with bounds checking
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f64> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Get a value without bounds checking
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f64 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set a value with bounds checking
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f64) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set a value without bounds checking
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f64) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let acc = AccumImage::new(8, 4).unwrap();
        assert_eq!(acc.width(), 8);
        assert_eq!(acc.height(), 4);
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(acc.get_pixel_unchecked(x, y), 0.0);
            }
        }
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(AccumImage::new(0, 4).is_err());
        assert!(AccumImage::new(4, 0).is_err());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut acc = AccumImage::new(4, 4).unwrap();
        acc.set_pixel(1, 2, 1234.5).unwrap();
        assert_eq!(acc.get_pixel(1, 2).unwrap(), 1234.5);
        assert!(acc.get_pixel(4, 0).is_err());
        assert!(acc.set_pixel(0, 4, 1.0).is_err());
    }
}
