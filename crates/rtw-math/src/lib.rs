//! # rtw-math
//!
//! Vector algebra for the rtw renderer.
//!
//! This crate provides the value types everything else builds on:
//!
//! - [`Vec3`] - 3D vector of `f64` with arithmetic operators, dot/cross
//!   products, length and normalization
//! - [`Point3`], [`Color`] - aliases of [`Vec3`] naming intent
//! - [`MathError`] - degenerate-input errors for the checked operations
//! - Scalar helpers ([`clamp`], [`lerp`], [`degrees_to_radians`])
//! - [`sample`] - random vectors from a caller-supplied RNG
//!
//! # Design
//!
//! All operations take operands by value and return new values. There are no
//! output parameters, so in-place updates (`v *= v`) behave exactly like the
//! out-of-place form.
//!
//! Division by zero follows IEEE-754: `Vec3::ONE / 0.0` is all `inf` and
//! `Vec3::ZERO.unit()` is all `NaN`. The `checked_*`/`try_*` variants report
//! [`MathError`] instead.
//!
//! # Usage
//!
//! ```rust
//! use rtw_math::{Color, Vec3};
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
//!
//! let sky: Color = Vec3::ONE.lerp(Vec3::new(0.5, 0.7, 1.0), 0.5);
//! assert!(sky.is_finite());
//! ```
//!
//! # Dependencies
//!
//! - `glam` - `DVec3` interop
//! - [`rand`] - sampling
//! - [`thiserror`] - error derive
//!
//! # Used By
//!
//! - `rtw-io` - color quantization
//! - `rtw-cli` - gradient driver and `vec` diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod interp;
pub mod sample;
mod vec3;

pub use error::*;
pub use interp::*;
pub use vec3::*;
