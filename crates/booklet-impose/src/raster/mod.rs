//! Header-only raster decoding for pass-through PDF embedding.
//!
//! Page scans are never re-encoded: the compressed payload of the source
//! file goes into the output document as-is, wrapped in the matching PDF
//! stream filter. Only the header is parsed, for dimensions and the
//! color-space tag.

mod jpeg;
mod png;

use crate::types::*;
use std::path::Path;

/// A decoded raster: dimensions, format tag, and the compressed payload.
///
/// For JPEG the payload is the unmodified file (DCTDecode embeds whole JPEG
/// streams); for PNG it is the concatenated IDAT data (zlib scanlines,
/// embedded with FlateDecode and PNG predictors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub format: RasterFormat,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterFormat {
    Jpeg {
        /// Components from the SOF header: 1 gray, 3 RGB, 4 CMYK
        components: u8,
        /// Sample precision in bits
        bits: u8,
    },
    Png {
        /// IHDR color type: 0 gray, 2 truecolor, 3 indexed
        color_type: u8,
        bit_depth: u8,
        /// PLTE payload, RGB triplets; empty unless indexed
        palette: Vec<u8>,
    },
}

/// How a header scan failed, before the source path is known.
#[derive(Debug)]
pub(crate) enum ParseError {
    /// Header bytes do not parse as the claimed format
    Corrupt(String),
    /// Valid file, but a feature pass-through embedding cannot carry
    Unsupported(String),
}

impl ParseError {
    fn into_error(self, path: &Path) -> BookletError {
        match self {
            ParseError::Corrupt(reason) => BookletError::CorruptImage {
                path: path.to_owned(),
                reason,
            },
            ParseError::Unsupported(reason) => {
                BookletError::UnsupportedFormat(format!("{}: {reason}", path.display()))
            }
        }
    }
}

/// Read and decode the header of a page image.
///
/// The format is picked by extension (`jpg`/`jpeg`/`png`, any case); the
/// content must then parse as that format.
pub fn decode(path: &Path) -> Result<RasterImage> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parser = match extension.as_deref() {
        Some("jpg" | "jpeg") => jpeg::parse,
        Some("png") => png::parse,
        _ => {
            return Err(BookletError::UnsupportedFormat(format!(
                "{}: expected a jpg, jpeg, or png file",
                path.display()
            )));
        }
    };

    let data = std::fs::read(path)?;
    parser(data).map_err(|e| e.into_error(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected_without_reading() {
        let err = decode(Path::new("page.tiff")).unwrap_err();
        assert!(matches!(err, BookletError::UnsupportedFormat(_)));
        let err = decode(Path::new("page")).unwrap_err();
        assert!(matches!(err, BookletError::UnsupportedFormat(_)));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        // wrong content behind a recognized extension reports corruption,
        // proving the JPEG path was taken
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.JPG");
        std::fs::write(&path, b"not a jpeg").unwrap();
        let err = decode(&path).unwrap_err();
        assert!(matches!(err, BookletError::CorruptImage { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = decode(Path::new("/nonexistent/page.png")).unwrap_err();
        assert!(matches!(err, BookletError::Io(_)));
    }
}
