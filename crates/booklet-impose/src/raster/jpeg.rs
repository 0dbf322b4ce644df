//! JPEG header scan: dimensions and component count from the SOF marker.

use super::{ParseError, RasterFormat, RasterImage};

/// Parse the SOF header of a JPEG file; the whole file is kept as payload.
pub(crate) fn parse(data: Vec<u8>) -> Result<RasterImage, ParseError> {
    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return Err(ParseError::Corrupt("missing JPEG SOI marker".into()));
    }

    let mut pos = 2;
    while pos + 4 < data.len() {
        if data[pos] != 0xFF {
            return Err(ParseError::Corrupt(format!(
                "invalid marker byte at offset {pos}"
            )));
        }
        let marker = data[pos + 1];

        // fill bytes before a marker
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        // standalone markers carry no length field
        if marker == 0x01 || (0xD0..=0xD9).contains(&marker) {
            pos += 2;
            continue;
        }

        let len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;

        // SOF0-SOF15 excluding DHT (C4), JPG (C8) and DAC (CC)
        if matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF) {
            if pos + 10 > data.len() || len < 8 {
                return Err(ParseError::Corrupt("truncated SOF segment".into()));
            }
            let bits = data[pos + 4];
            let height = u16::from_be_bytes([data[pos + 5], data[pos + 6]]) as u32;
            let width = u16::from_be_bytes([data[pos + 7], data[pos + 8]]) as u32;
            let components = data[pos + 9];

            if width == 0 || height == 0 {
                return Err(ParseError::Corrupt("zero image dimension in SOF".into()));
            }
            if !matches!(components, 1 | 3 | 4) {
                return Err(ParseError::Unsupported(format!(
                    "{components}-component JPEG has no PDF color space mapping"
                )));
            }

            return Ok(RasterImage {
                width,
                height,
                format: RasterFormat::Jpeg { components, bits },
                data,
            });
        }

        pos += 2 + len;
    }

    Err(ParseError::Corrupt("no SOF marker found".into()))
}
