//! GrayImage - 8-bit grayscale raster
//!
//! `GrayImage` is a 2D array of `u8` intensity samples, row-major with
//! no padding, origin at the top left. It is the input and output
//! container for the binarization operations.
//!
//! # Examples
//!
//! ```
//! use sauvola_core::GrayImage;
//!
//! let mut img = GrayImage::new(100, 100).unwrap();
//! img.set_pixel(10, 20, 128).unwrap();
//! assert_eq!(img.get_pixel(10, 20).unwrap(), 128);
//! ```

use crate::error::{Error, Result};

/// 8-bit grayscale image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at
/// (x, y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new GrayImage with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use sauvola_core::GrayImage;
    ///
    /// let img = GrayImage::new(640, 480).unwrap();
    /// assert_eq!(img.width(), 640);
    /// assert_eq!(img.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(GrayImage {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Create a new GrayImage with all pixels set to the specified value
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(GrayImage {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a GrayImage from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0, and
    /// `Error::DataSizeMismatch` if `data.len() != width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sauvola_core::GrayImage;
    ///
    /// let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(img.get_pixel(1, 1).unwrap(), 4);
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(GrayImage {
            width,
            height,
            data,
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

    /// Get a pixel value with bounds checking
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u8> {
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

    /// Get a pixel value without bounds checking
    ///
    /// Panics on out-of-range coordinates in debug builds; callers
    /// must guarantee `x < width` and `y < height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set a pixel value with bounds checking
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
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

    /// Set a pixel value without bounds checking
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Set every pixel to the given value
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Borrow the raw row-major sample data
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let img = GrayImage::new(4, 3).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert!(img.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(GrayImage::new(0, 10).is_err());
        assert!(GrayImage::new(10, 0).is_err());
        assert!(GrayImage::new_with_value(0, 0, 7).is_err());
    }

    #[test]
    fn test_from_raw_rejects_size_mismatch() {
        let err = GrayImage::from_raw(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataSizeMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut img = GrayImage::new(5, 5).unwrap();
        img.set_pixel(2, 3, 200).unwrap();
        assert_eq!(img.get_pixel(2, 3).unwrap(), 200);
        assert_eq!(img.get_pixel_unchecked(2, 3), 200);
        // neighbours untouched
        assert_eq!(img.get_pixel(3, 2).unwrap(), 0);
    }

    #[test]
    fn test_bounds_checking() {
        let mut img = GrayImage::new(5, 5).unwrap();
        assert!(img.get_pixel(5, 0).is_err());
        assert!(img.get_pixel(0, 5).is_err());
        assert!(img.set_pixel(5, 5, 1).is_err());
    }

    #[test]
    fn test_fill() {
        let mut img = GrayImage::new(3, 3).unwrap();
        img.fill(17);
        assert!(img.data().iter().all(|&v| v == 17));
    }

    #[test]
    fn test_row_major_layout() {
        let img = GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.get_pixel_unchecked(0, 0), 1);
        assert_eq!(img.get_pixel_unchecked(2, 0), 3);
        assert_eq!(img.get_pixel_unchecked(0, 1), 4);
        assert_eq!(img.get_pixel_unchecked(2, 1), 6);
    }
}
