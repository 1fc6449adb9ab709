//! Pixel formats accepted by the histogram engine
//!
//! Buffers are tightly packed, interleaved 8-bit channels with no row
//! padding. The channel order for each format is fixed:
//!
//! | Format   | Bytes | Layout       |
//! |----------|-------|--------------|
//! | `Gray8`  | 1     | `V`          |
//! | `Rgb24`  | 3     | `R G B`      |
//! | `Rgba32` | 4     | `R G B A`    |

use crate::error::{Error, Result};

/// Pixel format tag for a raw byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// 8-bit grayscale
    Gray8 = 8,
    /// 24-bit RGB
    Rgb24 = 24,
    /// 32-bit RGBA
    Rgba32 = 32,
}

impl PixelFormat {
    /// Create a `PixelFormat` from a raw bits-per-pixel tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if `bits` is not 8, 24, or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(PixelFormat::Gray8),
            24 => Ok(PixelFormat::Rgb24),
            32 => Ok(PixelFormat::Rgba32),
            _ => Err(Error::UnsupportedFormat(format!("{bits} bpp"))),
        }
    }

    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the number of bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb24 => 3,
            PixelFormat::Rgba32 => 4,
        }
    }

    /// Whether pixels of this format carry an alpha byte.
    pub fn has_alpha(self) -> bool {
        self == PixelFormat::Rgba32
    }

    /// Expected buffer length for an image of the given size.
    ///
    /// Returns `None` if the length does not fit in `usize`.
    pub fn buffer_len(self, width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(self.bytes_per_pixel())
    }

    /// Split one pixel into `(r, g, b, a)`.
    ///
    /// Gray pixels expand to `r == g == b`. Formats without alpha report
    /// `a = 0`; callers decide from [`has_alpha`](Self::has_alpha) whether
    /// to count it. `pixel` must hold at least
    /// [`bytes_per_pixel`](Self::bytes_per_pixel) bytes.
    #[inline]
    pub(crate) fn decode(self, pixel: &[u8]) -> (u8, u8, u8, u8) {
        match self {
            PixelFormat::Gray8 => (pixel[0], pixel[0], pixel[0], 0),
            PixelFormat::Rgb24 => (pixel[0], pixel[1], pixel[2], 0),
            PixelFormat::Rgba32 => (pixel[0], pixel[1], pixel[2], pixel[3]),
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        assert_eq!(PixelFormat::from_bits(8).unwrap(), PixelFormat::Gray8);
        assert_eq!(PixelFormat::from_bits(24).unwrap(), PixelFormat::Rgb24);
        assert_eq!(PixelFormat::try_from(32u32).unwrap(), PixelFormat::Rgba32);
        assert!(matches!(
            PixelFormat::from_bits(16),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Gray8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Rgb24.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::Rgba32.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Rgba32.bits(), 32);
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(PixelFormat::Rgb24.buffer_len(4, 4), Some(48));
        assert_eq!(PixelFormat::Gray8.buffer_len(0, 10), Some(0));
        assert_eq!(
            PixelFormat::Rgba32.buffer_len(u32::MAX, u32::MAX),
            (u32::MAX as usize)
                .checked_mul(u32::MAX as usize)
                .and_then(|n| n.checked_mul(4))
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(PixelFormat::Gray8.decode(&[90]), (90, 90, 90, 0));
        assert_eq!(PixelFormat::Rgb24.decode(&[1, 2, 3]), (1, 2, 3, 0));
        assert_eq!(PixelFormat::Rgba32.decode(&[1, 2, 3, 4]), (1, 2, 3, 4));
        assert!(PixelFormat::Rgba32.has_alpha());
        assert!(!PixelFormat::Rgb24.has_alpha());
    }
}
