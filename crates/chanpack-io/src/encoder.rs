//! Encoder interface for packed pixel buffers.
//!
//! The compositor only needs one thing from an image format: take a packed
//! buffer plus its geometry and put it somewhere. Keeping that behind
//! [`PixelEncoder`] lets callers swap formats, and lets tests record the
//! call without touching the filesystem.

use crate::{IoError, IoResult};
use chanpack_core::{PixelBuffer, CHANNELS};
use std::path::Path;

/// Trait for pixel buffer writers.
///
/// # Example
///
/// ```rust,ignore
/// use chanpack_io::{PixelEncoder, IoResult};
/// use std::path::Path;
///
/// struct Discard;
///
/// impl PixelEncoder for Discard {
///     fn encode(&self, _: &[u8], _: u32, _: u32, _: u8, _: usize, _: &Path) -> IoResult<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait PixelEncoder {
    /// Writes `height` rows of `width` pixels with `channels` bytes each.
    ///
    /// Row `y` starts at byte `y * stride` of `buffer`.
    fn encode(
        &self,
        buffer: &[u8],
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
        destination: &Path,
    ) -> IoResult<()>;

    /// Writes a [`PixelBuffer`] as RGBA with `stride = width * 4`.
    fn encode_buffer(&self, buffer: &PixelBuffer, destination: &Path) -> IoResult<()> {
        let (width, height) = dimensions_u32(buffer.width(), buffer.height())?;
        self.encode(
            buffer.as_bytes(),
            width,
            height,
            CHANNELS as u8,
            buffer.stride(),
            destination,
        )
    }
}

impl<E: PixelEncoder + ?Sized> PixelEncoder for &E {
    fn encode(
        &self,
        buffer: &[u8],
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
        destination: &Path,
    ) -> IoResult<()> {
        (**self).encode(buffer, width, height, channels, stride, destination)
    }
}

/// Narrows compositor dimensions to what image formats store.
pub(crate) fn dimensions_u32(width: usize, height: usize) -> IoResult<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(IoError::InvalidDimensions(format!(
            "{}x{} exceeds u32 range",
            width, height
        ))),
    }
}

/// Checks that `buffer` can hold `height` rows at `stride`.
///
/// The last row only needs `width * channels` bytes.
pub(crate) fn validate_layout(
    buffer: &[u8],
    width: u32,
    height: u32,
    channels: u8,
    stride: usize,
) -> IoResult<usize> {
    let row_bytes = (width as usize)
        .checked_mul(channels as usize)
        .ok_or_else(|| IoError::InvalidDimensions(format!("{} x {} overflows", width, channels)))?;
    if stride < row_bytes {
        return Err(IoError::DimensionMismatch {
            expected: format!("stride >= {}", row_bytes),
            actual: format!("stride {}", stride),
        });
    }
    let needed = match height {
        0 => 0,
        h => (h as usize - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(row_bytes))
            .ok_or_else(|| IoError::InvalidDimensions(format!("{} rows at stride {} overflow", h, stride)))?,
    };
    if buffer.len() < needed {
        return Err(IoError::DimensionMismatch {
            expected: format!("{} bytes", needed),
            actual: format!("{} bytes", buffer.len()),
        });
    }
    Ok(row_bytes)
}
