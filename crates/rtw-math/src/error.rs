//! Error types for checked vector operations.
//!
//! The default arithmetic on [`crate::Vec3`] never fails: dividing by zero or
//! normalizing the zero vector propagates `inf`/`NaN` components exactly like
//! plain `f64` arithmetic. The checked variants
//! ([`Vec3::checked_div`](crate::Vec3::checked_div),
//! [`Vec3::try_unit`](crate::Vec3::try_unit)) return [`MathError`] instead.
//!
//! # Usage
//!
//! ```rust
//! use rtw_math::{MathError, Vec3};
//!
//! let err = Vec3::ZERO.try_unit().unwrap_err();
//! assert_eq!(err, MathError::ZeroLength);
//! ```

use thiserror::Error;

/// Result type alias using [`MathError`] as the error type.
pub type MathResult<T> = std::result::Result<T, MathError>;

/// Degenerate input rejected by a checked vector operation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Scalar divisor was zero.
    #[error("division by zero scalar")]
    DivisionByZero,

    /// Vector has zero length and cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// Operation produced or received a non-finite component.
    #[error("non-finite component in {0}")]
    NonFinite(&'static str),
}

impl MathError {
    /// Returns `true` if the error comes from a zero divisor or zero length.
    #[inline]
    pub fn is_zero_divisor(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::ZeroLength)
    }
}
