//! In-memory 8-bit RGB raster.
//!
//! Pixels are stored row-major, top row first, left pixel first within a row;
//! the same order the PPM writer emits them.

use tracing::trace;

use crate::{IoError, IoResult};

/// One pixel: red, green, blue.
pub type Rgb8 = [u8; 3];

/// 8-bit RGB image buffer.
///
/// # Example
///
/// ```rust
/// use rtw_io::RgbImage;
///
/// let mut img = RgbImage::new(2, 2).unwrap();
/// img.put(1, 0, [255, 0, 0]).unwrap();
/// assert_eq!(img.get(1, 0).unwrap(), [255, 0, 0]);
/// assert!(img.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl RgbImage {
    /// Creates a black image.
    ///
    /// # Errors
    ///
    /// [`IoError::InvalidDimensions`] if either dimension is zero or the pixel
    /// count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> IoResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![[0; 3]; len],
        })
    }

    /// Wraps existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// [`IoError::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb8>) -> IoResult<Self> {
        let len = pixel_count(width, height)?;
        if pixels.len() != len {
            return Err(IoError::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", len, pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds an image by evaluating `f(col, row)` for every pixel.
    ///
    /// Rows are evaluated in parallel when the `rayon` feature is enabled, so
    /// `f` must be `Sync`. The result does not depend on evaluation order.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> IoResult<Self>
    where
        F: Fn(u32, u32) -> Rgb8 + Sync,
    {
        let len = pixel_count(width, height)?;
        trace!(width, height, "RgbImage::from_fn");
        let mut pixels = vec![[0; 3]; len];
        let fill_row = |(row, line): (usize, &mut [Rgb8])| {
            for (col, px) in line.iter_mut().enumerate() {
                *px = f(col as u32, row as u32);
            }
        };

        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            pixels
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(fill_row);
        }
        #[cfg(not(feature = "rayon"))]
        pixels.chunks_mut(width as usize).enumerate().for_each(fill_row);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb8]> {
        self.pixels.chunks(self.width as usize)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> IoResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(IoError::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Returns the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> IoResult<Rgb8> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    /// Sets the pixel at column `x`, row `y`.
    pub fn put(&mut self, x: u32, y: u32, px: Rgb8) -> IoResult<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = px;
        Ok(())
    }

    /// Per-channel (min, max, mean) over the whole image.
    pub fn channel_stats(&self) -> [(u8, u8, f64); 3] {
        let mut out = [(u8::MAX, u8::MIN, 0.0); 3];
        let mut sums = [0u64; 3];
        for px in &self.pixels {
            for c in 0..3 {
                out[c].0 = out[c].0.min(px[c]);
                out[c].1 = out[c].1.max(px[c]);
                sums[c] += u64::from(px[c]);
            }
        }
        let n = self.pixels.len() as f64;
        for c in 0..3 {
            out[c].2 = sums[c] as f64 / n;
        }
        out
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> IoResult<usize> {
    if width == 0 || height == 0 {
        return Err(IoError::invalid_dimensions(width, height, "zero-sized image"));
    }
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::invalid_dimensions(width, height, "pixel count overflows"))?;
    // Vec allocations are limited to isize::MAX bytes.
    if count > isize::MAX as usize / size_of::<Rgb8>() {
        return Err(IoError::invalid_dimensions(
            width,
            height,
            "pixel buffer exceeds addressable memory",
        ));
    }
    Ok(count)
}
