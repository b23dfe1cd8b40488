//! Image format detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::IoResult;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain-text PPM (`P3`).
    Ppm,
    /// Binary PPM (`P6`). Recognized but not supported.
    PpmBinary,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path (magic bytes, then extension).
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    ///
    /// `.ppm` maps to [`Format::Ppm`]; the extension cannot tell P3 from P6.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("ppm") | Some("pnm") => Format::Ppm,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 3];
        let n = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..n]))
    }

    /// Detects format from raw bytes: `P3`/`P6` followed by whitespace.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.len() < 3 || !bytes[2].is_ascii_whitespace() {
            return Format::Unknown;
        }
        match &bytes[0..2] {
            b"P3" => Format::Ppm,
            b"P6" => Format::PpmBinary,
            _ => Format::Unknown,
        }
    }
}
