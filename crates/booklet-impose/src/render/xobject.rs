//! Image XObject embedding and deduplication.
//!
//! Each distinct source file becomes one image stream in the output
//! document, no matter how many sheets place it. The registry is keyed by
//! source path rather than object identity so that resource names and
//! object numbering depend only on the sheet order, keeping the serialized
//! byte stream reproducible.

use crate::raster::{self, RasterFormat, RasterImage};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One embedded image: its resource number, object, and pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImageEntry {
    /// 1-based resource index; the content stream names it `/I<index>`
    pub index: usize,
    pub object: ObjectId,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
pub(crate) struct ImageRegistry {
    entries: HashMap<PathBuf, ImageEntry>,
}

impl ImageRegistry {
    /// Decode and embed `path` once; later calls return the cached entry.
    pub fn register(&mut self, doc: &mut Document, path: &Path) -> Result<ImageEntry> {
        if let Some(entry) = self.entries.get(path) {
            return Ok(*entry);
        }

        let image = raster::decode(path)?;
        let entry = ImageEntry {
            index: self.entries.len() + 1,
            object: doc.add_object(image_stream(&image)),
            width: image.width,
            height: image.height,
        };
        self.entries.insert(path.to_owned(), entry);
        Ok(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Build the image stream: the compressed source payload behind the filter
/// matching its native encoding.
fn image_stream(image: &RasterImage) -> Stream {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width as i64));
    dict.set("Height", Object::Integer(image.height as i64));

    match &image.format {
        RasterFormat::Jpeg { components, bits } => {
            dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
            dict.set("BitsPerComponent", Object::Integer(*bits as i64));
            dict.set("ColorSpace", Object::Name(jpeg_color_space(*components)));
        }
        RasterFormat::Png {
            color_type,
            bit_depth,
            palette,
        } => {
            dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
            dict.set("BitsPerComponent", Object::Integer(*bit_depth as i64));
            dict.set("ColorSpace", png_color_space(*color_type, palette));
            dict.set(
                "DecodeParms",
                Object::Dictionary(Dictionary::from_iter(vec![
                    // 15 = any PNG per-row predictor
                    ("Predictor", Object::Integer(15)),
                    (
                        "Colors",
                        Object::Integer(if *color_type == 2 { 3 } else { 1 }),
                    ),
                    ("BitsPerComponent", Object::Integer(*bit_depth as i64)),
                    ("Columns", Object::Integer(image.width as i64)),
                ])),
            );
        }
    }

    let mut stream = Stream::new(dict, image.data.clone());
    // payload is already compressed
    stream.allows_compression = false;
    stream
}

fn jpeg_color_space(components: u8) -> Vec<u8> {
    match components {
        1 => b"DeviceGray".to_vec(),
        4 => b"DeviceCMYK".to_vec(),
        _ => b"DeviceRGB".to_vec(),
    }
}

fn png_color_space(color_type: u8, palette: &[u8]) -> Object {
    match color_type {
        0 => Object::Name(b"DeviceGray".to_vec()),
        3 => Object::Array(vec![
            Object::Name(b"Indexed".to_vec()),
            Object::Name(b"DeviceRGB".to_vec()),
            Object::Integer((palette.len() / 3) as i64 - 1),
            Object::String(palette.to_vec(), StringFormat::Hexadecimal),
        ]),
        _ => Object::Name(b"DeviceRGB".to_vec()),
    }
}
