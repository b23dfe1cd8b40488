//! 3D vector type for points, directions and colors.
//!
//! [`Vec3`] is a plain `Copy` triple of `f64`. Every operation takes its operands
//! by value and returns a new vector, so there is no output location to alias and
//! no "missing result" case to check.
//!
//! [`Point3`] and [`Color`] are aliases: same representation, same operations,
//! different intent at the call site.
//!
//! # Usage
//!
//! ```rust
//! use rtw_math::{cross, dot, Point3, Vec3};
//!
//! let origin = Point3::ZERO;
//! let dir = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(dir.length(), 5.0);
//!
//! let up = cross(Vec3::X, Vec3::Y);
//! assert_eq!(up, Vec3::Z);
//! assert_eq!(dot(Vec3::X, Vec3::Y), 0.0);
//!
//! let p = origin + dir.unit() * 2.0;
//! assert!((p.length() - 2.0).abs() < 1e-12);
//! ```
//!
//! # Numeric edge cases
//!
//! Division by a zero scalar and normalization of the zero vector are not
//! guarded; they yield `inf`/`NaN` components exactly as `f64` does. Use
//! [`Vec3::checked_div`] or [`Vec3::try_unit`] to reject them instead.

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{MathError, MathResult};

/// Threshold below which every component counts as zero in [`Vec3::near_zero`].
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// A 3D vector of `f64` components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use rtw_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v[1], 2.0);
/// assert_eq!(-v, Vec3::new(-1.0, -2.0, -3.0));
/// assert_eq!(v * Vec3::splat(2.0), v * 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

/// A position in 3-space. Identical to [`Vec3`].
pub type Point3 = Vec3;

/// A linear RGB color, components nominally in `[0, 1]`. Identical to [`Vec3`].
pub type Color = Vec3;

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Negates every component.
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Component-wise (Hadamard) product. Same as `self * other`.
    ///
    /// Not a dot or cross product:
    ///
    /// ```rust
    /// use rtw_math::Vec3;
    ///
    /// let p = Vec3::new(2.0, 3.0, 4.0).hadamard(Vec3::new(5.0, 6.0, 7.0));
    /// assert_eq!(p, Vec3::new(10.0, 18.0, 28.0));
    /// ```
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Adds `s` to every component. Same as `self + s`.
    #[inline]
    pub fn add_scalar(self, s: f64) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s)
    }

    /// Subtracts `s` from every component. Same as `self - s`.
    #[inline]
    pub fn sub_scalar(self, s: f64) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s)
    }

    /// Multiplies every component by `s`. Same as `self * s`.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector has no direction: the result is all `NaN`.
    /// See [`Vec3::try_unit`] for the checked form.
    #[inline]
    pub fn unit(self) -> Self {
        self / self.length()
    }

    /// Divides by `s`, rejecting a zero or non-finite divisor.
    ///
    /// ```rust
    /// use rtw_math::{MathError, Vec3};
    ///
    /// assert_eq!(Vec3::ONE.checked_div(2.0), Ok(Vec3::splat(0.5)));
    /// assert_eq!(Vec3::ONE.checked_div(0.0), Err(MathError::DivisionByZero));
    /// ```
    #[inline]
    pub fn checked_div(self, s: f64) -> MathResult<Self> {
        if s == 0.0 {
            Err(MathError::DivisionByZero)
        } else if !s.is_finite() {
            Err(MathError::NonFinite("divisor"))
        } else {
            Ok(self / s)
        }
    }

    /// Normalizes, rejecting zero-length and non-finite vectors.
    #[inline]
    pub fn try_unit(self) -> MathResult<Self> {
        let len = self.length();
        if len == 0.0 {
            Err(MathError::ZeroLength)
        } else if !len.is_finite() {
            Err(MathError::NonFinite("vector"))
        } else {
            Ok(self / len)
        }
    }

    /// Returns true if every component is within [`NEAR_ZERO_EPSILON`] of zero.
    #[inline]
    pub fn near_zero(self) -> bool {
        self.x.abs() < NEAR_ZERO_EPSILON
            && self.y.abs() < NEAR_ZERO_EPSILON
            && self.z.abs() < NEAR_ZERO_EPSILON
    }

    /// Mirror reflection of `self` about the surface normal `n`.
    ///
    /// `n` is expected to be unit length.
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        self - n * (2.0 * self.dot(n))
    }

    /// Refraction of the unit vector `self` through a surface with unit normal `n`.
    ///
    /// `eta_ratio` is the ratio of refractive indices (incident over transmitted).
    pub fn refract(self, n: Self, eta_ratio: f64) -> Self {
        let cos_theta = (-self).dot(n).min(1.0);
        let r_out_perp = (self + n * cos_theta) * eta_ratio;
        let r_out_parallel = n * -(1.0 - r_out_perp.length_squared()).abs().sqrt();
        r_out_perp + r_out_parallel
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if every component differs from `other` by at most `epsilon`.
    #[inline]
    pub fn abs_diff_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Dot product of `u` and `v`.
#[inline]
pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.dot(v)
}

/// Cross product of `u` and `v`.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

/// `v` scaled to unit length. `NaN` for the zero vector.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.unit()
}

/// Formats as `[x y z]` with six decimals.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6} {:.6} {:.6}]", self.x, self.y, self.z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// -Vec3
impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 + f64
impl Add<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        self.add_scalar(rhs)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 - f64
impl Sub<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        self.sub_scalar(rhs)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.hadamard(rhs)
    }
}

// Vec3 * f64
impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

// f64 * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

// Vec3 / f64, via the reciprocal so a zero divisor yields inf/NaN
impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.scale(1.0 / rhs)
    }
}

// Compound assignment: the right-hand side is a copy, so `a op= a` is safe.
impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> glam::DVec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn samples() -> [Vec3; 4] {
        [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, 7.0),
            Vec3::new(0.1, -0.2, 0.3),
            Vec3::new(1e3, -2e-3, 5.5),
        ]
    }

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Point3::default(), Vec3::ZERO);
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(5.0, 7.0, 9.0)
        );
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(dot(Vec3::X, Vec3::Y), 0.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(unit_vector(Vec3::new(0.0, 5.0, 0.0)), Vec3::Y);
        assert_eq!(
            Vec3::new(2.0, 3.0, 4.0) * Vec3::new(5.0, 6.0, 7.0),
            Vec3::new(10.0, 18.0, 28.0)
        );
    }

    #[test]
    fn test_add_commutative_associative() {
        let [u, v, w, _] = samples();
        assert_eq!(u + v, v + u);
        assert_abs_diff_eq!(((u + v) + w).x, (u + (v + w)).x, epsilon = 1e-12);
        assert_abs_diff_eq!(((u + v) + w).y, (u + (v + w)).y, epsilon = 1e-12);
        assert_abs_diff_eq!(((u + v) + w).z, (u + (v + w)).z, epsilon = 1e-12);
    }

    #[test]
    fn test_negate() {
        for v in samples() {
            assert_eq!(-(-v), v);
            assert_eq!(v.negate().negate(), v);
            assert_eq!(v + (-v), Vec3::ZERO);
        }
        let (a, b) = (Vec3::new(9.0, -1.0, 2.0), Vec3::new(3.0, 3.0, -3.0));
        assert_eq!(a + b.negate(), a - b);
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vec3::new(1.0, -2.0, 4.0);
        assert_eq!(v * 1.0, v);
        assert_eq!(v * 0.0, Vec3::ZERO);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v + 1.0, Vec3::new(2.0, -1.0, 5.0));
        assert_eq!(v - 1.0, Vec3::new(0.0, -3.0, 3.0));
        assert_eq!(v.add_scalar(0.5), v + 0.5);
        assert_eq!(v.sub_scalar(0.5), v - 0.5);
        assert_eq!(v / 2.0, Vec3::new(0.5, -1.0, 2.0));
    }

    #[test]
    fn test_div_undoes_mul() {
        for v in samples() {
            for s in [3.0, -0.7, 1e-3, 12345.0] {
                assert!(((v * s) / s).abs_diff_eq(v, 1e-9 * v.length().max(1.0)));
            }
        }
    }

    #[test]
    fn test_div_by_zero_is_non_finite() {
        let r = Vec3::new(1.0, -2.0, 0.0) / 0.0;
        assert_eq!(r.x, f64::INFINITY);
        assert_eq!(r.y, f64::NEG_INFINITY);
        assert!(r.z.is_nan());
        assert!(!r.is_finite());
    }

    #[test]
    fn test_dot_cross() {
        let [u, v, _, _] = samples();
        assert_eq!(u.dot(v), v.dot(u));
        assert_eq!(u.cross(v), -v.cross(u));
        let c = u.cross(v);
        assert_abs_diff_eq!(c.dot(u), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.dot(v), 0.0, epsilon = 1e-9);
        assert_eq!(u.cross(u * 3.0), Vec3::ZERO);
        assert_eq!(u.cross(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_length() {
        for v in samples() {
            assert_eq!(v.length(), v.length_squared().sqrt());
            assert!(v.length() > 0.0);
        }
        assert_eq!(Vec3::ZERO.length(), 0.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
    }

    #[test]
    fn test_unit() {
        for v in samples() {
            assert_relative_eq!(v.unit().length(), 1.0, epsilon = 1e-12);
        }
        assert!(Vec3::ZERO.unit().is_nan());
    }

    #[test]
    fn test_checked() {
        assert_eq!(Vec3::ONE.checked_div(0.0), Err(MathError::DivisionByZero));
        assert_eq!(
            Vec3::ONE.checked_div(f64::NAN),
            Err(MathError::NonFinite("divisor"))
        );
        assert_eq!(Vec3::new(0.0, 0.0, 4.0).checked_div(4.0), Ok(Vec3::Z));
        assert_eq!(Vec3::ZERO.try_unit(), Err(MathError::ZeroLength));
        assert_eq!(Vec3::new(0.0, -2.0, 0.0).try_unit(), Ok(-Vec3::Y));
        assert!(Vec3::splat(f64::INFINITY).try_unit().is_err());
    }

    #[test]
    fn test_in_place_matches_out_of_place() {
        let v = Vec3::new(2.0, -3.0, 5.0);

        let mut a = v;
        a *= a;
        assert_eq!(a, v * v);

        let mut b = v;
        b += b;
        assert_eq!(b, v * 2.0);

        let mut c = v;
        c -= c;
        assert_eq!(c, Vec3::ZERO);

        let mut d = v;
        d *= 3.0;
        d /= 3.0;
        assert!(d.abs_diff_eq(v, 1e-12));

        let mut e = v;
        e = e.cross(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(e, v.cross(Vec3::X));
    }

    #[test]
    fn test_reflect_refract() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflect(Vec3::Y), Vec3::new(1.0, 1.0, 0.0));

        // Matching indices pass straight through.
        let uv = Vec3::new(1.0, -1.0, 0.0).unit();
        assert!(uv.refract(Vec3::Y, 1.0).abs_diff_eq(uv, 1e-12));

        // Normal incidence never bends.
        let r = (-Vec3::Y).refract(Vec3::Y, 1.0 / 1.5);
        assert!(r.abs_diff_eq(-Vec3::Y, 1e-12));
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::splat(1e-9).near_zero());
        assert!(!Vec3::new(0.0, 0.0, 1e-7).near_zero());
    }

    #[test]
    fn test_misc() {
        let a = Vec3::new(1.0, 5.0, -2.0);
        let b = Vec3::new(3.0, -1.0, 0.0);
        assert_eq!(a.min(b), Vec3::new(1.0, -1.0, -2.0));
        assert_eq!(a.max(b), Vec3::new(3.0, 5.0, 0.0));
        assert_eq!(a.abs(), Vec3::new(1.0, 5.0, 2.0));
        assert_eq!(a.min_element(), -2.0);
        assert_eq!(a.max_element(), 5.0);
        assert_eq!(Vec3::ZERO.lerp(Vec3::ONE, 0.5), Vec3::splat(0.5));
        assert_eq!(Vec3::new(4.0, 9.0, 16.0).sqrt(), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!([a, b].into_iter().sum::<Vec3>(), a + b);
    }

    #[test]
    fn test_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let _ = Vec3::ZERO[3];
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Vec3::new(1.0, -0.5, 2.25).to_string(),
            "[1.000000 -0.500000 2.250000]"
        );
    }

    #[test]
    fn test_conversions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), v);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(Vec3::from((1.0, 2.0, 3.0)), v);
        let g: glam::DVec3 = v.into();
        assert_eq!(g.cross(glam::DVec3::X), v.cross(Vec3::X).to_glam());
        assert_eq!(Vec3::from(g), v);
    }
}
