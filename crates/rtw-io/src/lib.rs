//! # rtw-io
//!
//! Pixel output for the rtw renderer.
//!
//! - [`color`] - color vector to 8-bit channel quantization
//! - [`RgbImage`] - row-major 8-bit RGB raster
//! - [`ppm`] - plain-text PPM (`P3`) writer and reader
//! - [`read`] / [`write`] - path-based entry points with format detection
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rtw_io::{color::to_rgb8, RgbImage};
//! use rtw_math::Color;
//!
//! let image = RgbImage::from_fn(256, 256, |x, y| {
//!     to_rgb8(Color::new(x as f64 / 255.0, y as f64 / 255.0, 0.25))
//! })?;
//! rtw_io::write("out.ppm", &image)?;
//! # Ok::<(), rtw_io::IoError>(())
//! ```
//!
//! # Dependencies
//!
//! - `rtw-math` - [`rtw_math::Color`]
//! - [`thiserror`] - [`IoError`]
//! - [`tracing`] - debug/trace events for file operations
//! - [`rayon`] - parallel rows in [`RgbImage::from_fn`] (feature `rayon`, default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
mod detect;
mod error;
mod image;
pub mod ppm;
mod traits;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use image::{Rgb8, RgbImage};
pub use traits::{ImageReader, ImageWriter};

use std::path::Path;

/// Reads an image from a file, detecting the format from its contents.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not plain-text PPM
/// - The PPM data is malformed
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let path = path.as_ref();
    match Format::detect(path)? {
        Format::Ppm => ppm::read(path),
        Format::PpmBinary => Err(IoError::UnsupportedFormat(
            "binary PPM (P6); only plain-text P3 is supported".into(),
        )),
        Format::Unknown => Err(IoError::UnsupportedFormat(unknown_name(path))),
    }
}

/// Writes an image to a file, choosing the format by extension.
///
/// # Errors
///
/// Returns an error if the extension is not `.ppm`/`.pnm` or the file cannot
/// be created or written.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbImage) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Ppm => ppm::write(path, image),
        _ => Err(IoError::UnsupportedFormat(unknown_name(path))),
    }
}

fn unknown_name(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| format!("{} (no extension)", path.display()), str::to_string)
}
