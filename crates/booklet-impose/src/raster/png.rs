//! PNG header scan: IHDR fields plus the raw IDAT payload.
//!
//! PDF carries PNG scanline data natively: the zlib stream from the IDAT
//! chunks goes into a FlateDecode image stream whose DecodeParms declare
//! the PNG predictor set. Alpha, 16-bit samples, and interlacing have no
//! such direct mapping and are refused rather than decoded.

use super::{ParseError, RasterFormat, RasterImage};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

pub(crate) fn parse(data: Vec<u8>) -> Result<RasterImage, ParseError> {
    if data.len() < 8 || data[..8] != SIGNATURE {
        return Err(ParseError::Corrupt("missing PNG signature".into()));
    }

    let mut pos = 8;
    let mut header: Option<(u32, u32, u8, u8)> = None;
    let mut palette = Vec::new();
    let mut idat = Vec::new();

    while pos + 8 <= data.len() {
        let len = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
            as usize;
        let kind = &data[pos + 4..pos + 8];
        let body = pos + 8;
        let next = body + len + 4; // chunk CRC trails the body
        if next > data.len() {
            return Err(ParseError::Corrupt("truncated chunk".into()));
        }

        match kind {
            b"IHDR" => {
                if len < 13 {
                    return Err(ParseError::Corrupt("truncated IHDR".into()));
                }
                let d = &data[body..];
                let width = u32::from_be_bytes([d[0], d[1], d[2], d[3]]);
                let height = u32::from_be_bytes([d[4], d[5], d[6], d[7]]);
                let bit_depth = d[8];
                let color_type = d[9];
                let interlace = d[12];

                if width == 0 || height == 0 {
                    return Err(ParseError::Corrupt("zero image dimension in IHDR".into()));
                }
                if bit_depth > 8 {
                    return Err(ParseError::Unsupported(format!(
                        "{bit_depth}-bit PNG cannot be embedded without re-encoding"
                    )));
                }
                if matches!(color_type, 4 | 6) {
                    return Err(ParseError::Unsupported(
                        "PNG alpha channel cannot be embedded without re-encoding".into(),
                    ));
                }
                if !matches!(color_type, 0 | 2 | 3) {
                    return Err(ParseError::Corrupt(format!(
                        "unknown PNG color type {color_type}"
                    )));
                }
                if interlace != 0 {
                    return Err(ParseError::Unsupported(
                        "interlaced PNG cannot be embedded without re-encoding".into(),
                    ));
                }

                header = Some((width, height, bit_depth, color_type));
            }
            b"PLTE" => palette.extend_from_slice(&data[body..body + len]),
            b"IDAT" => idat.extend_from_slice(&data[body..body + len]),
            b"IEND" => break,
            _ => {}
        }

        pos = next;
    }

    let (width, height, bit_depth, color_type) =
        header.ok_or_else(|| ParseError::Corrupt("no IHDR chunk".into()))?;
    if idat.is_empty() {
        return Err(ParseError::Corrupt("no IDAT data".into()));
    }
    if color_type == 3 && palette.is_empty() {
        return Err(ParseError::Corrupt("indexed PNG without a PLTE chunk".into()));
    }

    Ok(RasterImage {
        width,
        height,
        format: RasterFormat::Png {
            color_type,
            bit_depth,
            palette,
        },
        data: idat,
    })
}
