use crate::error::{Error, ParamError, Result};

/// A white (transparent) pixel.
pub const WHITE: u8 = 0;

/// A black (opaque) pixel.
pub const BLACK: u8 = 1;

/// Rectangular row-major buffer of binary pixels.
///
/// Every entry is [`WHITE`] or [`BLACK`]; constructors reject anything else.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    height: usize,
    width: usize,
    pixels: Vec<u8>,
}

/// Allocates a zeroed buffer, reporting failure instead of aborting.
fn allocate(len: usize) -> Result<Vec<u8>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { bytes: len })?;
    pixels.resize(len, WHITE);
    Ok(pixels)
}

fn area(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(ParamError::Dimensions { height, width }.into());
    }

    height
        .checked_mul(width)
        .ok_or_else(|| ParamError::Dimensions { height, width }.into())
}

impl PixelMatrix {
    /// Creates an all-white matrix.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let len = area(height, width)?;

        Ok(Self {
            height,
            width,
            pixels: allocate(len)?,
        })
    }

    /// Wraps an existing row-major buffer of 0/1 values.
    pub fn from_pixels(height: usize, width: usize, pixels: Vec<u8>) -> Result<Self> {
        let len = area(height, width)?;

        if pixels.len() != len {
            return Err(ParamError::BufferLength {
                expected: len,
                found: pixels.len(),
            }
            .into());
        }

        if let Some((index, &value)) = pixels.iter().enumerate().find(|(_, v)| **v > BLACK) {
            return Err(ParamError::PixelValue { index, value }.into());
        }

        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Binarizes a packed 24-bit RGB buffer (3 bytes per pixel, row-major).
    ///
    /// Luminance is `0.299 R + 0.587 G + 0.114 B`; pixels darker than
    /// `threshold` become black.
    pub fn from_rgb24(height: usize, width: usize, rgb: &[u8], threshold: u8) -> Result<Self> {
        let len = area(height, width)?;
        let expected = len
            .checked_mul(3)
            .ok_or(ParamError::Dimensions { height, width })?;

        if rgb.len() != expected {
            return Err(ParamError::BufferLength {
                expected,
                found: rgb.len(),
            }
            .into());
        }

        let mut pixels = allocate(len)?;
        // Fixed-point weights scaled by 1000.
        let limit = u32::from(threshold) * 1000;
        for (pixel, c) in pixels.iter_mut().zip(rgb.chunks_exact(3)) {
            let luma = 299 * u32::from(c[0]) + 587 * u32::from(c[1]) + 114 * u32::from(c[2]);
            if luma < limit {
                *pixel = BLACK;
            }
        }

        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Allocates a white matrix with the same dimensions as `self`.
    pub(crate) fn blank_like(&self) -> Result<Self> {
        Self::new(self.height, self.width)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`: zero-sized matrices cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.height && col < self.width);
        self.pixels[row * self.width + col]
    }

    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds or `value` is not 0 or 1.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(row < self.height && col < self.width);
        assert!(value <= BLACK);
        self.pixels[row * self.width + col] = value;
    }

    #[inline]
    pub fn is_black(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == BLACK
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    /// The whole buffer, row-major.
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn count_black(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == BLACK).count()
    }

    /// Reduces an expanded image to one pixel per `block_height x block_width`
    /// block. A pixel is black iff every sub-pixel of its block is black.
    ///
    /// Applied to the stack of all shares of the deterministic scheme, this
    /// recovers the secret exactly.
    pub fn collapse_blocks(&self, block_height: usize, block_width: usize) -> Result<Self> {
        if block_height == 0
            || block_width == 0
            || self.height % block_height != 0
            || self.width % block_width != 0
        {
            return Err(ParamError::BlockSize {
                block_height,
                block_width,
                height: self.height,
                width: self.width,
            }
            .into());
        }

        let mut out = Self::new(self.height / block_height, self.width / block_width)?;

        for row in 0..out.height {
            for col in 0..out.width {
                let all_black = (0..block_height).all(|dr| {
                    let start = (row * block_height + dr) * self.width + col * block_width;
                    self.pixels[start..start + block_width]
                        .iter()
                        .all(|&p| p == BLACK)
                });

                if all_black {
                    out.pixels[row * out.width + col] = BLACK;
                }
            }
        }

        Ok(out)
    }
}

impl std::fmt::Debug for PixelMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PixelMatrix {}x{}", self.height, self.width)?;
        for row in 0..self.height {
            let line: String = self
                .row(row)
                .iter()
                .map(|&p| if p == BLACK { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_white() {
        let m = PixelMatrix::new(3, 5).unwrap();
        assert_eq!(m.dimensions(), (3, 5));
        assert_eq!(m.count_black(), 0);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(matches!(
            PixelMatrix::new(0, 4),
            Err(Error::InvalidParameter(ParamError::Dimensions { .. }))
        ));
        assert!(PixelMatrix::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_from_pixels_validates() {
        assert!(PixelMatrix::from_pixels(2, 2, vec![0, 1, 1, 0]).is_ok());
        assert!(matches!(
            PixelMatrix::from_pixels(2, 2, vec![0, 1, 1]),
            Err(Error::InvalidParameter(ParamError::BufferLength {
                expected: 4,
                found: 3
            }))
        ));
        assert!(matches!(
            PixelMatrix::from_pixels(2, 2, vec![0, 1, 2, 0]),
            Err(Error::InvalidParameter(ParamError::PixelValue { index: 2, value: 2 }))
        ));
    }

    #[test]
    fn test_rgb_threshold() {
        let rgb = [
            0, 0, 0, // black
            255, 255, 255, // white
            200, 10, 10, // dark red: 0.299*200 + 0.587*10 + 0.114*10 = 66.8
            10, 250, 10, // bright green: 151.0
        ];
        let m = PixelMatrix::from_rgb24(2, 2, &rgb, 128).unwrap();
        assert_eq!(m.as_slice(), &[BLACK, WHITE, BLACK, WHITE]);

        assert!(PixelMatrix::from_rgb24(2, 2, &rgb[..9], 128).is_err());
    }

    #[test]
    fn test_collapse_requires_fully_black_blocks() {
        #[rustfmt::skip]
        let m = PixelMatrix::from_pixels(2, 4, vec![
            1, 1, 1, 0,
            1, 1, 1, 1,
        ])
        .unwrap();

        let c = m.collapse_blocks(2, 2).unwrap();
        assert_eq!(c.as_slice(), &[BLACK, WHITE]);

        assert!(m.collapse_blocks(2, 3).is_err());
        assert!(m.collapse_blocks(0, 1).is_err());
    }
}
