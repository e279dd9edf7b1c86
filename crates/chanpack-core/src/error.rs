//! Error types for chanpack-core operations.
//!
//! Every failure in the compositor is a contract violation by the caller:
//! a channel slice of the wrong length, or dimensions whose byte count
//! cannot be represented. Nothing here is retryable.
//!
//! # Usage
//!
//! ```rust
//! use chanpack_core::{Channel, Error, Result};
//!
//! fn check(len: usize, nx: usize, ny: usize) -> Result<()> {
//!     if len != nx * ny {
//!         return Err(Error::channel_length(Channel::Red, nx * ny, len));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 2, 2).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::channel::ChannelMatrix`] - Length validation
//! - [`crate::buffer::PixelBuffer`] - Buffer construction
//! - [`crate::compose`] - Compose entry points
//! - `chanpack-io` - Wrapped as `IoError::Core`

use crate::Channel;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing channel matrices.
///
/// # Categories
///
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`DimensionMismatch`](Error::DimensionMismatch)
/// - **Length errors**: [`ChannelLength`](Error::ChannelLength)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when `width * height * 4` overflows `usize`, or when a
    /// pixel buffer's byte count does not match its declared size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A channel slice does not hold exactly `nx * ny` samples.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chanpack_core::{Channel, Error};
    ///
    /// let err = Error::channel_length(Channel::Green, 6, 4);
    /// assert!(err.to_string().contains("green"));
    /// ```
    #[error("invalid dimensions: {channel} channel has {got} samples, expected {expected}")]
    ChannelLength {
        /// Offending channel
        channel: Channel,
        /// nx * ny
        expected: usize,
        /// Actual slice length
        got: usize,
    },

    /// Channel matrices passed together disagree on their size.
    #[error("dimension mismatch: {a_nx}x{a_ny} vs {b_nx}x{b_ny}")]
    DimensionMismatch {
        /// First matrix columns
        a_nx: usize,
        /// First matrix rows
        a_ny: usize,
        /// Second matrix columns
        b_nx: usize,
        /// Second matrix rows
        b_ny: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ChannelLength`] error.
    #[inline]
    pub fn channel_length(channel: Channel, expected: usize, got: usize) -> Self {
        Self::ChannelLength {
            channel,
            expected,
            got,
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_nx: a.0,
            a_ny: a.1,
            b_nx: b.0,
            b_ny: b.1,
        }
    }

    /// Returns `true` for every variant that describes a size problem.
    ///
    /// Currently that is all of them; callers that only care about
    /// "bad input shape" can match on this instead of the variants.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::ChannelLength { .. }
                | Self::DimensionMismatch { .. }
        )
    }
}
