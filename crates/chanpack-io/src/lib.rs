//! # chanpack-io
//!
//! Writes composed pixel buffers to disk.
//!
//! - [`PixelEncoder`] - narrow encoder interface (buffer, geometry, path)
//! - [`PngEncoder`] - PNG implementation on the `png` crate
//! - [`read_png`] - decode a PNG back to packed 8-bit bytes
//! - [`write_matrix_to_png`] - compose three planes and write one PNG
//!
//! ## Example
//!
//! ```rust,ignore
//! use chanpack_io::write_matrix_to_png;
//!
//! // nx = 2 columns, ny = 1 row
//! write_matrix_to_png(&[0.0, 1.0], &[1.0, 0.0], &[0.0, 0.0], "out.png", 2, 1)?;
//! ```
//!
//! ## Logging
//!
//! Encode and decode events are emitted through `tracing` at `debug`
//! level. Install a subscriber in the host application to see them.

#![warn(missing_docs)]

pub mod encoder;
pub mod error;
pub mod png;

pub use crate::encoder::PixelEncoder;
pub use crate::error::{IoError, IoResult};
pub use crate::png::{read_png, read_png_from_memory, DecodedImage, PngCompression, PngEncoder, PngOptions};

use chanpack_core::compose;
use std::path::Path;

/// Composes `r`, `g`, `b` and writes the result as an RGBA PNG.
///
/// Planes are column-major `nx x ny` (index = column * ny + row). The file
/// is `nx` pixels wide and `ny` high with stride `nx * 4`.
///
/// # Errors
///
/// - [`IoError::Core`] if a plane has the wrong length.
/// - [`IoError::InvalidDimensions`] if `nx` or `ny` is zero or exceeds `u32`.
/// - [`IoError::Io`] / [`IoError::EncodeError`] if writing fails.
pub fn write_matrix_to_png<P: AsRef<Path>>(
    r: &[f64],
    g: &[f64],
    b: &[f64],
    path: P,
    nx: usize,
    ny: usize,
) -> IoResult<()> {
    write_matrix_with(&PngEncoder::new(), r, g, b, path, nx, ny)
}

/// Same as [`write_matrix_to_png`] with a caller-chosen encoder.
pub fn write_matrix_with<E: PixelEncoder, P: AsRef<Path>>(
    encoder: &E,
    r: &[f64],
    g: &[f64],
    b: &[f64],
    path: P,
    nx: usize,
    ny: usize,
) -> IoResult<()> {
    let buffer = compose(r, g, b, nx, ny)?;
    encoder.encode_buffer(&buffer, path.as_ref())
}
