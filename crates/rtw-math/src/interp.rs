//! Scalar helpers shared by the vector and color code.
//!
//! # Usage
//!
//! ```rust
//! use rtw_math::{clamp, degrees_to_radians, lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(clamp(1.5, 0.0, 0.999), 0.999);
//! assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
//! ```

/// Positive infinity, for "no hit yet" style bounds.
pub const INFINITY: f64 = f64::INFINITY;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Clamps `x` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the upper bound wins.
/// NaN input maps to `min`.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// A degenerate range (`a == b`) maps everything to `0.0`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-12 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}
