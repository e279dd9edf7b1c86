//! Channel compositor: three column-major planes to one RGBA8 buffer.
//!
//! The transform does three things in a single pass:
//!
//! 1. **Transpose** - source sample `(c, r)` lives at `c * ny + r`,
//!    destination pixel `(c, r)` at `r * nx * 4 + c * 4`.
//! 2. **Interleave** - R, G, B planes become bytes 0, 1, 2 of each pixel,
//!    byte 3 is [`OPAQUE`].
//! 3. **Quantize** - every sample goes through [`quantize`].
//!
//! # Example
//!
//! ```rust
//! use chanpack_core::compose;
//!
//! // nx = 2 columns, ny = 1 row
//! let r = [0.0, 1.0];
//! let g = [1.0, 0.0];
//! let b = [0.0, 0.0];
//! let buf = compose(&r, &g, &b, 2, 1).unwrap();
//! assert_eq!(buf.as_bytes(), &[0, 255, 0, 255, 255, 0, 0, 255]);
//! ```

use crate::buffer::{byte_len, CHANNELS};
use crate::{quantize, Channel, ChannelMatrix, Error, PixelBuffer, Result, OPAQUE};

/// Composes three `nx x ny` column-major planes into a new RGBA8 buffer.
///
/// # Errors
///
/// - [`Error::ChannelLength`] if any slice is not exactly `nx * ny` long.
/// - [`Error::InvalidDimensions`] if the output size overflows.
pub fn compose(r: &[f64], g: &[f64], b: &[f64], nx: usize, ny: usize) -> Result<PixelBuffer> {
    let planes = Planes::new(r, g, b, nx, ny)?;
    Ok(planes.compose())
}

/// Composes pre-validated matrices.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the matrices differ in size.
pub fn compose_matrices(
    r: &ChannelMatrix<'_>,
    g: &ChannelMatrix<'_>,
    b: &ChannelMatrix<'_>,
) -> Result<PixelBuffer> {
    for other in [g, b] {
        if other.dimensions() != r.dimensions() {
            return Err(Error::dimension_mismatch(r.dimensions(), other.dimensions()));
        }
    }
    let planes = Planes {
        r: *r,
        g: *g,
        b: *b,
        len: byte_len(r.nx(), r.ny())?,
    };
    Ok(planes.compose())
}

/// Composes into a caller-owned vector, reusing its allocation.
///
/// `out` is cleared and resized to `nx * ny * 4`; prior contents are
/// discarded. On error `out` is left unchanged.
///
/// ```rust
/// use chanpack_core::compose_into;
///
/// let mut out = vec![9u8; 100];
/// compose_into(&[1.0], &[0.5], &[0.0], 1, 1, &mut out).unwrap();
/// assert_eq!(out, vec![255, 128, 0, 255]);
/// ```
pub fn compose_into(
    r: &[f64],
    g: &[f64],
    b: &[f64],
    nx: usize,
    ny: usize,
    out: &mut Vec<u8>,
) -> Result<()> {
    let planes = Planes::new(r, g, b, nx, ny)?;
    out.clear();
    out.resize(planes.len, 0);
    planes.fill(out);
    Ok(())
}

/// Row-parallel [`compose`]. Output is byte-identical.
///
/// Each output row reads one sample from every column, so rows are
/// independent and split across the rayon pool.
#[cfg(feature = "rayon")]
pub fn compose_par(r: &[f64], g: &[f64], b: &[f64], nx: usize, ny: usize) -> Result<PixelBuffer> {
    use rayon::prelude::*;

    let planes = Planes::new(r, g, b, nx, ny)?;
    let mut data = vec![0u8; planes.len];
    if planes.len > 0 {
        data.par_chunks_mut(nx * CHANNELS)
            .enumerate()
            .for_each(|(row, dst)| planes.fill_row(row, dst));
    }
    Ok(PixelBuffer::from_parts(nx, ny, data))
}

/// Validated triple of planes plus the output byte count.
struct Planes<'a> {
    r: ChannelMatrix<'a>,
    g: ChannelMatrix<'a>,
    b: ChannelMatrix<'a>,
    len: usize,
}

impl<'a> Planes<'a> {
    fn new(r: &'a [f64], g: &'a [f64], b: &'a [f64], nx: usize, ny: usize) -> Result<Self> {
        let len = byte_len(nx, ny)?;
        Ok(Self {
            r: ChannelMatrix::new(Channel::Red, r, nx, ny)?,
            g: ChannelMatrix::new(Channel::Green, g, nx, ny)?,
            b: ChannelMatrix::new(Channel::Blue, b, nx, ny)?,
            len,
        })
    }

    fn compose(&self) -> PixelBuffer {
        let mut data = vec![0u8; self.len];
        self.fill(&mut data);
        PixelBuffer::from_parts(self.r.nx(), self.r.ny(), data)
    }

    /// Fills `dst` (exactly `len` bytes) column by column.
    ///
    /// Walking columns in the outer loop reads the planes sequentially.
    fn fill(&self, dst: &mut [u8]) {
        let (nx, ny) = self.r.dimensions();
        let (r, g, b) = (self.r.as_slice(), self.g.as_slice(), self.b.as_slice());
        let stride = nx * CHANNELS;
        for c in 0..nx {
            for row in 0..ny {
                let src = c * ny + row;
                let di = row * stride + c * CHANNELS;
                let px = &mut dst[di..di + CHANNELS];
                px[0] = quantize(r[src]);
                px[1] = quantize(g[src]);
                px[2] = quantize(b[src]);
                px[3] = OPAQUE;
            }
        }
    }

    /// Fills one output row of `nx * 4` bytes.
    #[cfg(feature = "rayon")]
    fn fill_row(&self, row: usize, dst: &mut [u8]) {
        let ny = self.r.ny();
        let (r, g, b) = (self.r.as_slice(), self.g.as_slice(), self.b.as_slice());
        for (c, px) in dst.chunks_exact_mut(CHANNELS).enumerate() {
            let src = c * ny + row;
            px[0] = quantize(r[src]);
            px[1] = quantize(g[src]);
            px[2] = quantize(b[src]);
            px[3] = OPAQUE;
        }
    }
}
