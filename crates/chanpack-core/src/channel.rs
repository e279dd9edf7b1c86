//! Column-major colour planes.
//!
//! A [`ChannelMatrix`] is a borrowed view over one colour plane produced by
//! a simulation grid. Samples are stored column by column:
//!
//! ```text
//! index = column * ny + row
//!
//! Memory: [c0r0 c0r1 c0r2 ... c1r0 c1r1 c1r2 ...]
//! ```
//!
//! The length is checked once in [`ChannelMatrix::new`]; after that every
//! `(column, row)` inside `nx x ny` is a valid index.

use crate::{Error, Result};
use std::fmt;

/// Identifies one of the three input planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red plane
    Red,
    /// Green plane
    Green,
    /// Blue plane
    Blue,
}

impl Channel {
    /// All input planes in output byte order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel inside an RGBA pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        })
    }
}

/// Read-only view of one colour plane with its grid size.
///
/// # Example
///
/// ```rust
/// use chanpack_core::{Channel, ChannelMatrix};
///
/// // 2 columns, 3 rows
/// let data = [0.0, 0.1, 0.2, 1.0, 1.1, 1.2];
/// let m = ChannelMatrix::new(Channel::Red, &data, 2, 3).unwrap();
/// assert_eq!(m.get(1, 2), Some(1.2));
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChannelMatrix<'a> {
    channel: Channel,
    data: &'a [f64],
    nx: usize,
    ny: usize,
}

impl<'a> ChannelMatrix<'a> {
    /// Wraps `data` as an `nx` x `ny` column-major plane.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `nx * ny` overflows.
    /// - [`Error::ChannelLength`] if `data.len() != nx * ny`.
    pub fn new(channel: Channel, data: &'a [f64], nx: usize, ny: usize) -> Result<Self> {
        let expected = nx
            .checked_mul(ny)
            .ok_or_else(|| Error::invalid_dimensions(nx, ny, "sample count overflows usize"))?;
        if data.len() != expected {
            return Err(Error::channel_length(channel, expected, data.len()));
        }
        Ok(Self {
            channel,
            data,
            nx,
            ny,
        })
    }

    /// Which plane this is.
    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Number of columns (output width).
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of rows (output height).
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Grid size as `(nx, ny)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Raw samples in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Sample at `(column, row)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        if column >= self.nx || row >= self.ny {
            return None;
        }
        self.data.get(column * self.ny + row).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_indexing() {
        // nx = 3, ny = 2
        let data = [10.0, 11.0, 20.0, 21.0, 30.0, 31.0];
        let m = ChannelMatrix::new(Channel::Green, &data, 3, 2).unwrap();
        assert_eq!(m.get(0, 0), Some(10.0));
        assert_eq!(m.get(0, 1), Some(11.0));
        assert_eq!(m.get(2, 1), Some(31.0));
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.dimensions(), (3, 2));
    }

    #[test]
    fn test_short_slice_rejected() {
        let data = [0.0; 5];
        let err = ChannelMatrix::new(Channel::Blue, &data, 3, 2).unwrap_err();
        assert_eq!(err, Error::channel_length(Channel::Blue, 6, 5));
    }

    #[test]
    fn test_long_slice_rejected() {
        let data = [0.0; 7];
        assert!(ChannelMatrix::new(Channel::Red, &data, 3, 2).is_err());
    }

    #[test]
    fn test_overflow_rejected() {
        let err = ChannelMatrix::new(Channel::Red, &[], usize::MAX, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_empty_grid() {
        let m = ChannelMatrix::new(Channel::Red, &[], 0, 7).unwrap();
        assert_eq!(m.get(0, 0), None);
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn test_channel_offsets() {
        let offsets: Vec<usize> = Channel::ALL.iter().map(|c| c.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
        assert_eq!(Channel::Red.to_string(), "red");
    }
}
