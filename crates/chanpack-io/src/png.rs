//! PNG format support.
//!
//! Writes packed 8-bit buffers through the `png` crate and reads them back
//! for verification. Pixel bytes pass through unchanged in both directions;
//! the optional sRGB chunk is metadata only.
//!
//! # Example
//!
//! ```rust,ignore
//! use chanpack_io::png::{PngEncoder, read_png};
//! use chanpack_io::PixelEncoder;
//!
//! let buf = chanpack_core::compose(&r, &g, &b, nx, ny)?;
//! PngEncoder::new().encode_buffer(&buf, "field.png".as_ref())?;
//! let back = read_png("field.png")?;
//! assert_eq!(back.data, buf.as_bytes());
//! ```

use crate::encoder::{validate_layout, PixelEncoder};
use crate::{IoError, IoResult};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// zlib effort used for the image data stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PngCompression {
    /// Fast, larger files.
    Fast,
    /// The `png` crate default.
    #[default]
    Default,
    /// Slowest, smallest files.
    Best,
}

impl From<PngCompression> for png::Compression {
    fn from(c: PngCompression) -> Self {
        match c {
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Default => png::Compression::default(),
            PngCompression::Best => png::Compression::High,
        }
    }
}

/// PNG writer options.
///
/// ```rust
/// use chanpack_io::png::{PngCompression, PngOptions};
///
/// let opts = PngOptions {
///     compression: PngCompression::Fast,
///     ..Default::default()
/// };
/// assert!(opts.srgb_chunk);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PngOptions {
    /// Compression level.
    pub compression: PngCompression,
    /// Emit an sRGB chunk (perceptual intent).
    pub srgb_chunk: bool,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            srgb_chunk: true,
        }
    }
}

/// [`PixelEncoder`] backed by the `png` crate.
#[derive(Debug, Clone, Default)]
pub struct PngEncoder {
    options: PngOptions,
}

impl PngEncoder {
    /// Encoder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with explicit options.
    pub fn with_options(options: PngOptions) -> Self {
        Self { options }
    }

    /// Current options.
    pub fn options(&self) -> &PngOptions {
        &self.options
    }

    /// Encodes into a byte vector instead of a file.
    pub fn encode_to_memory(
        &self,
        buffer: &[u8],
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
    ) -> IoResult<Vec<u8>> {
        let pixels = self.prepare(buffer, width, height, channels, stride)?;
        let mut out = Vec::new();
        self.write_stream(&mut out, &pixels, width, height, channels)?;
        tracing::debug!(width, height, channels, bytes = out.len(), "encoded png to memory");
        Ok(out)
    }

    /// Validates geometry and returns tightly packed rows.
    fn prepare<'b>(
        &self,
        buffer: &'b [u8],
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
    ) -> IoResult<Cow<'b, [u8]>> {
        if width == 0 || height == 0 {
            return Err(IoError::InvalidDimensions(format!(
                "png cannot store a {}x{} image",
                width, height
            )));
        }
        color_type(channels)?;
        let row_bytes = validate_layout(buffer, width, height, channels, stride)?;
        if stride == row_bytes {
            return Ok(Cow::Borrowed(&buffer[..row_bytes * height as usize]));
        }
        tracing::warn!(stride, row_bytes, "repacking padded rows before png encode");
        let mut packed = Vec::with_capacity(row_bytes * height as usize);
        for y in 0..height as usize {
            let start = y * stride;
            packed.extend_from_slice(&buffer[start..start + row_bytes]);
        }
        Ok(Cow::Owned(packed))
    }

    fn write_stream<W: Write>(
        &self,
        writer: W,
        pixels: &[u8],
        width: u32,
        height: u32,
        channels: u8,
    ) -> IoResult<()> {
        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(color_type(channels)?);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.options.compression.into());
        if self.options.srgb_chunk {
            encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);
        }

        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(pixels)?;
        png_writer.finish()?;
        Ok(())
    }
}

impl PixelEncoder for PngEncoder {
    fn encode(
        &self,
        buffer: &[u8],
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
        destination: &Path,
    ) -> IoResult<()> {
        let pixels = self.prepare(buffer, width, height, channels, stride)?;

        let file = File::create(destination)?;
        let mut writer = BufWriter::new(file);
        self.write_stream(&mut writer, &pixels, width, height, channels)?;
        // BufWriter drops flush errors silently
        writer.flush()?;

        tracing::debug!(
            width,
            height,
            channels,
            path = %destination.display(),
            "wrote png"
        );
        Ok(())
    }
}

fn color_type(channels: u8) -> IoResult<png::ColorType> {
    match channels {
        1 => Ok(png::ColorType::Grayscale),
        2 => Ok(png::ColorType::GrayscaleAlpha),
        3 => Ok(png::ColorType::Rgb),
        4 => Ok(png::ColorType::Rgba),
        n => Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    }
}

/// Decoded 8-bit image, tightly packed row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per pixel (1-4).
    pub channels: u8,
    /// Pixel bytes, `width * height * channels` long.
    pub data: Vec<u8>,
}

/// Reads a PNG file from the given path.
pub fn read_png<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let image = decode(BufReader::new(file))?;
    tracing::debug!(
        width = image.width,
        height = image.height,
        channels = image.channels,
        path = %path.display(),
        "read png"
    );
    Ok(image)
}

/// Reads a PNG from an in-memory byte slice.
pub fn read_png_from_memory(data: &[u8]) -> IoResult<DecodedImage> {
    decode(Cursor::new(data))
}

fn decode<R: std::io::BufRead + std::io::Seek>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = png::Decoder::new(reader);
    // palette and sub-byte depths come out as 8-bit samples
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf)?;

    let channels = match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => 1,
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => 2,
        (png::ColorType::Rgb, png::BitDepth::Eight) => 3,
        (png::ColorType::Rgba, png::BitDepth::Eight) => 4,
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let row_bytes = info.width as usize * channels as usize;
    let data = if info.line_size == row_bytes {
        buf.truncate(info.buffer_size());
        buf
    } else {
        buf.chunks(info.line_size)
            .take(info.height as usize)
            .flat_map(|line| &line[..row_bytes])
            .copied()
            .collect()
    };

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        channels,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32, channels: u8) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * channels as u32) as usize);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels as u32 {
                    data.push(((x * 16 + y * 4 + c * 60) % 256) as u8);
                }
            }
        }
        data
    }

    #[test]
    fn test_memory_roundtrip_rgba() {
        let data = gradient(16, 8, 4);
        let bytes = PngEncoder::new()
            .encode_to_memory(&data, 16, 8, 4, 64)
            .expect("encode");
        let image = read_png_from_memory(&bytes).expect("decode");
        assert_eq!((image.width, image.height, image.channels), (16, 8, 4));
        assert_eq!(image.data, data);
    }

    #[test]
    fn test_memory_roundtrip_gray() {
        let data = gradient(5, 3, 1);
        let bytes = PngEncoder::new()
            .encode_to_memory(&data, 5, 3, 1, 5)
            .expect("encode");
        let image = read_png_from_memory(&bytes).expect("decode");
        assert_eq!(image.channels, 1);
        assert_eq!(image.data, data);
    }

    #[test]
    fn test_padded_rows_repacked() {
        // 3 RGB pixels per row = 9 bytes, stride 12
        let tight = gradient(3, 2, 3);
        let mut padded = Vec::new();
        padded.extend_from_slice(&tight[0..9]);
        padded.extend_from_slice(&[0xAA; 3]);
        padded.extend_from_slice(&tight[9..18]);

        let bytes = PngEncoder::new()
            .encode_to_memory(&padded, 3, 2, 3, 12)
            .expect("encode");
        let image = read_png_from_memory(&bytes).expect("decode");
        assert_eq!(image.data, tight);
    }

    #[test]
    fn test_options_do_not_change_pixels() {
        let data = gradient(9, 9, 4);
        for compression in [PngCompression::Fast, PngCompression::Default, PngCompression::Best] {
            let encoder = PngEncoder::with_options(PngOptions {
                compression,
                srgb_chunk: false,
            });
            let bytes = encoder.encode_to_memory(&data, 9, 9, 4, 36).expect("encode");
            assert_eq!(read_png_from_memory(&bytes).expect("decode").data, data);
        }
    }

    #[test]
    fn test_bad_channel_count() {
        let err = PngEncoder::new()
            .encode_to_memory(&[0; 10], 2, 1, 5, 10)
            .unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = PngEncoder::new().encode_to_memory(&[], 0, 4, 4, 0).unwrap_err();
        assert!(matches!(err, IoError::InvalidDimensions(_)));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let err = PngEncoder::new()
            .encode_to_memory(&[0; 31], 4, 2, 4, 16)
            .unwrap_err();
        assert!(matches!(err, IoError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_garbage_decode() {
        let err = read_png_from_memory(b"not a png").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_) | IoError::Io(_)));
    }

    #[test]
    fn test_default_options() {
        let encoder = PngEncoder::new();
        assert_eq!(encoder.options().compression, PngCompression::Default);
        assert!(encoder.options().srgb_chunk);
    }
}
