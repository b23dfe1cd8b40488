//! Color vector to 8-bit channel conversion.
//!
//! Two mappings are provided:
//!
//! - [`to_rgb8`] - the gradient driver's `trunc(255.999 * c)` mapping
//! - [`to_rgb8_sampled`] - averaging of accumulated samples with optional
//!   gamma-2 correction and `trunc(256 * clamp(c, 0, 0.999))`
//!
//! Both saturate: out-of-range and NaN components never wrap around.
//!
//! # Usage
//!
//! ```rust
//! use rtw_io::color::{to_rgb8, to_rgb8_sampled, Gamma};
//! use rtw_math::Color;
//!
//! assert_eq!(to_rgb8(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
//!
//! let sum = Color::new(1.0, 2.0, 4.0); // four samples accumulated
//! assert_eq!(to_rgb8_sampled(sum, 4, Gamma::Linear).unwrap(), [64, 128, 255]);
//! ```

use rtw_math::{clamp, Color};

use crate::{IoError, IoResult};

/// Scale used by [`to_rgb8`]; just under 256 so `1.0` lands on 255.
pub const RGB8_SCALE: f64 = 255.999;

/// Upper clamp used by [`to_rgb8_sampled`] before scaling by 256.
pub const SAMPLED_MAX: f64 = 0.999;

/// Encoding applied to averaged samples before quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gamma {
    /// Write linear values unchanged.
    Linear,
    /// Gamma 2: take the square root of each channel.
    #[default]
    Gamma2,
}

impl Gamma {
    #[inline]
    fn encode(self, v: f64) -> f64 {
        match self {
            Gamma::Linear => v,
            Gamma::Gamma2 => v.sqrt(),
        }
    }
}

#[inline]
fn quantize(v: f64, scale: f64) -> u8 {
    // NaN compares false everywhere; map it to black explicitly.
    if v.is_nan() {
        return 0;
    }
    (scale * v).clamp(0.0, 255.0) as u8
}

/// Converts a color with components in `[0, 1]` to 8-bit channels.
///
/// Each channel is `trunc(255.999 * c)`, saturated to `[0, 255]`.
#[inline]
pub fn to_rgb8(color: Color) -> [u8; 3] {
    [
        quantize(color.x, RGB8_SCALE),
        quantize(color.y, RGB8_SCALE),
        quantize(color.z, RGB8_SCALE),
    ]
}

/// Converts the sum of `samples_per_pixel` color samples to 8-bit channels.
///
/// # Errors
///
/// [`IoError::InvalidParameter`] if `samples_per_pixel` is zero.
pub fn to_rgb8_sampled(sum: Color, samples_per_pixel: u32, gamma: Gamma) -> IoResult<[u8; 3]> {
    if samples_per_pixel == 0 {
        return Err(IoError::InvalidParameter(
            "samples_per_pixel must be at least 1".into(),
        ));
    }
    let scale = 1.0 / f64::from(samples_per_pixel);
    let channel = |c: f64| {
        let v = clamp(gamma.encode(c * scale), 0.0, SAMPLED_MAX);
        quantize(v, 256.0)
    };
    Ok([channel(sum.x), channel(sum.y), channel(sum.z)])
}

/// Parses `"r, g, b"` with 8-bit channel values into a [`Color`] in `[0, 1]`.
///
/// # Errors
///
/// [`IoError::Parse`] unless there are exactly three numbers in `[0, 255]`.
pub fn parse_rgb8(s: &str) -> IoResult<Color> {
    let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(IoError::Parse(format!(
            "expected \"r, g, b\", got {} component(s) in {:?}",
            parts.len(),
            s
        )));
    }
    let mut out = Color::ZERO;
    for (i, part) in parts.iter().enumerate() {
        let v: f64 = part
            .parse()
            .map_err(|_| IoError::Parse(format!("invalid channel value {:?}", part)))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(IoError::Parse(format!("channel value {} outside [0, 255]", v)));
        }
        out[i] = v / 255.0;
    }
    Ok(out)
}
