//! Float to 8-bit quantization.
//!
//! Maps a sample in `[0.0, 1.0]` to `0..=255` by clamp, scale and round.
//!
//! # Non-finite input
//!
//! | Input   | Output |
//! |---------|--------|
//! | `NaN`   | `0`    |
//! | `+inf`  | `255`  |
//! | `-inf`  | `0`    |
//!
//! # Rounding
//!
//! Ties round half away from zero ([`f64::round`]), so `0.5` maps to `128`.

/// Channel value written for every alpha sample.
pub const OPAQUE: u8 = 255;

/// Quantizes a normalized sample to an 8-bit value.
///
/// # Example
///
/// ```rust
/// use chanpack_core::quantize;
///
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(0.5), 128);
/// assert_eq!(quantize(1.0), 255);
/// assert_eq!(quantize(f64::NAN), 0);
/// ```
#[inline]
pub fn quantize(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    // clamp maps +-inf onto the bounds
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(-5.0), 0);
        assert_eq!(quantize(5.0), 255);
    }

    #[test]
    fn test_half_rounds_up() {
        // 0.5 * 255 = 127.5
        assert_eq!(quantize(0.5), 128);
    }

    #[test]
    fn test_nearest() {
        assert_eq!(quantize(0.2), 51);
        assert_eq!(quantize(100.4 / 255.0), 100);
        assert_eq!(quantize(100.6 / 255.0), 101);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(quantize(f64::NAN), 0);
        assert_eq!(quantize(-f64::NAN), 0);
        assert_eq!(quantize(f64::INFINITY), 255);
        assert_eq!(quantize(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_alpha_constant() {
        assert_eq!(quantize(1.0), OPAQUE);
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(quantize(-0.0), 0);
    }
}
