//! Error types for encode and decode operations.

use std::io;
use thiserror::Error;

/// Encoder or decoder failure.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Composing the pixel buffer failed.
    #[error(transparent)]
    Core(#[from] chanpack_core::Error),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Image size the format cannot express.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffer too small for the declared geometry.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Unsupported bit depth or colour type.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),
}

/// Result type for encode and decode operations.
pub type IoResult<T> = Result<T, IoError>;

impl From<png::EncodingError> for IoError {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(e) => Self::Io(e),
            other => Self::EncodeError(other.to_string()),
        }
    }
}

impl From<png::DecodingError> for IoError {
    fn from(err: png::DecodingError) -> Self {
        match err {
            png::DecodingError::IoError(e) => Self::Io(e),
            other => Self::DecodeError(other.to_string()),
        }
    }
}
