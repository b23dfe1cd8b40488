//! Plain-text PPM (`P3`) format support.
//!
//! The writer emits exactly:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! r g b        <- one line per pixel, row-major, top row first
//! ```
//!
//! The reader is more lenient, as the Netpbm definition allows: tokens may be
//! separated by any whitespace, `#` starts a comment running to end of line,
//! and any max value in `1..=65535` is accepted and rescaled to 255.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::image::{pixel_count, Rgb8, RgbImage};
use crate::traits::{ImageReader, ImageWriter};
use crate::{IoError, IoResult};

/// Magic number of plain-text PPM.
pub const PPM_MAGIC: &str = "P3";

/// Channel maximum written to the header.
pub const MAX_VALUE: u16 = 255;

/// Writes `image` as P3 to any writer.
pub fn write_to<W: Write>(writer: &mut W, image: &RgbImage) -> IoResult<()> {
    writeln!(writer, "{}", PPM_MAGIC)?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "{}", MAX_VALUE)?;
    for [r, g, b] in image.pixels() {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

/// Writes a P3 file.
///
/// A file that cannot be created is reported as [`IoError::Io`] before any
/// pixel is formatted.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbImage) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), "ppm::write");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, image)?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Wrote PPM"
    );
    Ok(())
}

/// Reads P3 data from any reader.
pub fn read_from<R: Read>(reader: &mut R) -> IoResult<RgbImage> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            IoError::InvalidFile("PPM data is not valid UTF-8 text".into())
        } else {
            IoError::Io(e)
        }
    })?;
    parse(&text)
}

/// Reads a P3 file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let path = path.as_ref();
    trace!(path = %path.display(), "ppm::read");
    let mut file = File::open(path)?;
    let image = read_from(&mut file)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Read PPM"
    );
    Ok(image)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(data, _)| data))
        .flat_map(str::split_whitespace)
}

fn next_number<'a, I: Iterator<Item = &'a str>>(it: &mut I, what: &str) -> IoResult<u32> {
    let tok = it
        .next()
        .ok_or_else(|| IoError::InvalidFile(format!("unexpected end of data reading {}", what)))?;
    tok.parse()
        .map_err(|_| IoError::Parse(format!("invalid {} {:?}", what, tok)))
}

fn parse(text: &str) -> IoResult<RgbImage> {
    let mut it = tokens(text);

    match it.next() {
        Some(PPM_MAGIC) => {}
        Some(other) => {
            return Err(IoError::InvalidFile(format!(
                "expected magic {:?}, found {:?}",
                PPM_MAGIC, other
            )));
        }
        None => return Err(IoError::InvalidFile("empty PPM data".into())),
    }

    let width = next_number(&mut it, "width")?;
    let height = next_number(&mut it, "height")?;
    let max = next_number(&mut it, "max value")?;
    if max == 0 || max > 65535 {
        return Err(IoError::InvalidFile(format!(
            "max value {} outside 1..=65535",
            max
        )));
    }

    let count = pixel_count(width, height)?;
    // Every pixel takes at least six bytes of text ("0 0 0 ").
    let mut pixels: Vec<Rgb8> = Vec::with_capacity(count.min(text.len() / 6 + 1));
    for _ in 0..count {
        let mut px = [0u8; 3];
        for channel in &mut px {
            let v = next_number(&mut it, "sample")?;
            if v > max {
                return Err(IoError::InvalidFile(format!(
                    "sample {} exceeds max value {}",
                    v, max
                )));
            }
            *channel = rescale(v, max);
        }
        pixels.push(px);
    }
    if let Some(extra) = it.next() {
        return Err(IoError::InvalidFile(format!(
            "trailing data after {} pixels: {:?}",
            pixels.len(),
            extra
        )));
    }
    RgbImage::from_pixels(width, height, pixels)
}

#[inline]
fn rescale(v: u32, max: u32) -> u8 {
    if max == u32::from(MAX_VALUE) {
        v as u8
    } else {
        ((v * 255 + max / 2) / max) as u8
    }
}

/// [`ImageReader`] for P3 files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmReader;

impl ImageReader for PpmReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<RgbImage> {
        read(path)
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<RgbImage> {
        let mut cursor = data;
        read_from(&mut cursor)
    }
}

/// [`ImageWriter`] for P3 files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmWriter;

impl ImageWriter for PpmWriter {
    fn write<P: AsRef<Path>>(&self, path: P, image: &RgbImage) -> IoResult<()> {
        write(path, image)
    }

    fn write_to_memory(&self, image: &RgbImage) -> IoResult<Vec<u8>> {
        let mut buf = Vec::new();
        write_to(&mut buf, image)?;
        Ok(buf)
    }
}
