//! Packed RGBA8 pixel buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, with four interleaved
//! 8-bit channels and no padding between rows:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0 (stride = width * 4)
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! This is the layout image encoders expect for an RGBA8 image with
//! `stride == width * 4`.

use crate::{Error, Result};

/// Channels per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

/// Owned RGBA8 image, row-major, tightly packed.
///
/// The byte length is always `width * height * 4`.
///
/// # Example
///
/// ```rust
/// use chanpack_core::PixelBuffer;
///
/// let buf = PixelBuffer::from_rgba(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
/// assert_eq!(buf.stride(), 8);
/// assert_eq!(buf.pixel(1, 0), Some([4, 5, 6, 255]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wraps already-packed RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4` or the product overflows.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Constructor for callers that already sized `data` via [`byte_len`].
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * CHANNELS);
        Self {
            data,
            width,
            height,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    /// Total byte count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when width or height is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the `[R, G, B, A]` bytes at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y * self.stride() + x * CHANNELS;
        self.data
            .get(idx..idx + CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Iterates over rows as byte slices of length [`stride`](Self::stride).
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.stride().max(1))
    }

    /// Borrows the packed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the packed bytes.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<PixelBuffer> for Vec<u8> {
    fn from(buf: PixelBuffer) -> Self {
        buf.data
    }
}

/// Byte length of a `width x height` RGBA8 image, checked for overflow.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if the product overflows `usize`.
pub fn byte_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "byte count overflows usize"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_length_check() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes, got 15"));
    }

    #[test]
    fn test_pixel_access() {
        let data: Vec<u8> = (0..24).collect();
        let buf = PixelBuffer::from_rgba(3, 2, data).unwrap();
        assert_eq!(buf.pixel(0, 0), Some([0, 1, 2, 3]));
        assert_eq!(buf.pixel(2, 1), Some([20, 21, 22, 23]));
        assert_eq!(buf.pixel(3, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
    }

    #[test]
    fn test_rows() {
        let data: Vec<u8> = (0..24).collect();
        let buf = PixelBuffer::from_rgba(3, 2, data).unwrap();
        let rows: Vec<&[u8]> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], 12);
    }

    #[test]
    fn test_empty() {
        let buf = PixelBuffer::from_rgba(0, 5, Vec::new()).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.rows().count(), 0);
        assert_eq!(buf.stride(), 0);
    }

    #[test]
    fn test_byte_len_overflow() {
        assert_eq!(byte_len(3, 2).unwrap(), 24);
        assert!(byte_len(usize::MAX / 2, 3).is_err());
    }
}
