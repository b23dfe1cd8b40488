//! CLI command implementations

pub mod gradient;
pub mod info;
pub mod vec;

use anyhow::{bail, Context, Result};
use rtw_io::RgbImage;
use rtw_math::Vec3;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbImage> {
    rtw_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbImage) -> Result<()> {
    rtw_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parses `x,y,z` (whitespace around components allowed).
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected x,y,z but got {:?}", s);
    }
    let mut v = Vec3::ZERO;
    for (i, part) in parts.iter().enumerate() {
        v[i] = part
            .parse()
            .with_context(|| format!("invalid component {:?} in {:?}", part, s))?;
    }
    Ok(v)
}
