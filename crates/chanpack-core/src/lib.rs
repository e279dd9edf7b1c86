//! # chanpack-core
//!
//! Converts simulation output, three `f64` colour planes, into a packed
//! RGBA8 pixel buffer ready for an image encoder.
//!
//! - [`quantize`] - clamp, scale and round one sample to `u8`
//! - [`ChannelMatrix`] - length-checked view over a column-major plane
//! - [`PixelBuffer`] - owned row-major RGBA8 image
//! - [`compose`], [`compose_into`], [`compose_matrices`] - the transform
//! - `compose_par` - row-parallel transform (`rayon` feature)
//!
//! ## Layouts
//!
//! ```text
//! input plane  (column-major): index = column * ny + row
//! output bytes (row-major):    index = row * nx * 4 + column * 4 + {R,G,B,A}
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! chanpack-core (this crate)
//!    ^
//!    |
//!    +-- chanpack-io (PNG encoding and decoding)
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - Enable [`compose_par`] (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod channel;
pub mod compose;
pub mod error;
pub mod quantize;

// Re-exports for convenience
pub use buffer::{byte_len, PixelBuffer, CHANNELS};
pub use channel::{Channel, ChannelMatrix};
#[cfg(feature = "rayon")]
pub use compose::compose_par;
pub use compose::{compose, compose_into, compose_matrices};
pub use error::{Error, Result};
pub use quantize::{quantize, OPAQUE};

/// Prelude module for convenient imports.
///
/// ```
/// use chanpack_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, CHANNELS};
    pub use crate::channel::{Channel, ChannelMatrix};
    pub use crate::compose::{compose, compose_into, compose_matrices};
    pub use crate::error::{Error, Result};
    pub use crate::quantize::{quantize, OPAQUE};
}
