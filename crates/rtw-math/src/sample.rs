//! Random vector sampling.
//!
//! Every function draws from a caller-supplied [`rand::Rng`], so seeded
//! generators give reproducible sequences.
//!
//! # Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use rtw_math::sample;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let p = sample::random_in_unit_sphere(&mut rng);
//! assert!(p.length_squared() < 1.0);
//! ```

use rand::Rng;

use crate::vec3::Vec3;

/// Uniform random scalar in `[min, max)`.
#[inline]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.random::<f64>()
}

/// Vector with each component uniform in `[0, 1)`.
#[inline]
pub fn random_vec<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.random(), rng.random(), rng.random())
}

/// Vector with each component uniform in `[min, max)`.
#[inline]
pub fn random_vec_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        random_range(rng, min, max),
        random_range(rng, min, max),
        random_range(rng, min, max),
    )
}

/// Point strictly inside the unit sphere, by rejection from the enclosing cube.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_vec_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Point strictly inside the unit disk in the XY plane (`z == 0`).
pub fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(random_range(rng, -1.0, 1.0), random_range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random direction of unit length.
///
/// Samples exactly at the origin are redrawn so the result is always finite.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        if let Ok(v) = random_in_unit_sphere(rng).try_unit() {
            return v;
        }
    }
}

/// Point inside the unit sphere on the same side as `normal`.
pub fn random_in_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Vec3 {
    let p = random_in_unit_sphere(rng);
    if p.dot(normal) > 0.0 { p } else { -p }
}
