//! Output document assembly.
//!
//! `BookletWriter` turns planned sheets into a PDF, one physical page per
//! sheet. It is append-only and single-pass: a page's content is fixed the
//! moment its sheet is added, and `finish` only installs the pages tree and
//! catalog around what was accumulated.

mod font;
mod xobject;

pub use font::{FontMetrics, TIMES_BOLD};

use crate::layout::{Rect, SheetGeometry, fit_image};
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use xobject::ImageRegistry;

pub struct BookletWriter {
    doc: Document,
    pages_id: ObjectId,
    page_refs: Vec<Object>,
    font_id: ObjectId,
    images: ImageRegistry,
    geom: SheetGeometry,
    metrics: FontMetrics,
}

impl BookletWriter {
    pub fn new(options: &BookletOptions) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Times-Bold".to_vec())),
        ]));

        Self {
            doc,
            pages_id,
            page_refs: Vec::new(),
            font_id,
            images: ImageRegistry::default(),
            geom: SheetGeometry::from_options(options),
            metrics: TIMES_BOLD,
        }
    }

    /// Append one physical page carrying the sheet's two halves.
    ///
    /// Blank halves emit nothing; a fully blank sheet still becomes an
    /// empty page, because the sheet count is fixed by the plan.
    pub fn add_sheet(&mut self, sheet: &Sheet) -> Result<()> {
        let mut content = String::new();
        let mut xobjects = Dictionary::new();

        let halves = [
            (&sheet.left, self.geom.left_region(), Side::Left),
            (&sheet.right, self.geom.right_region(), Side::Right),
        ];
        for (half, region, side) in halves {
            let Some(half) = half else { continue };

            let entry = self.images.register(&mut self.doc, &half.source)?;
            let placed = fit_image(
                entry.width as f32,
                entry.height as f32,
                region,
                self.geom.image_margin,
            )?;

            content.push_str(&placement_op(entry.index, &placed));
            xobjects.set(
                format!("I{}", entry.index).into_bytes(),
                Object::Reference(entry.object),
            );
            content.push_str(&self.number_op(half.number, side));
        }

        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));
        resources.set(
            "Font",
            Object::Dictionary(Dictionary::from_iter(vec![(
                "F1",
                Object::Reference(self.font_id),
            )])),
        );

        let page_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.geom.width),
                    Object::Real(self.geom.height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        self.page_refs.push(Object::Reference(page_id));

        Ok(())
    }

    /// Pages added so far
    pub fn sheet_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Distinct images embedded so far
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Install the pages tree and catalog; the result serializes on save.
    pub fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        self.doc
    }

    /// Page number text op: bottom inset, left-aligned on left halves,
    /// right-aligned flush to the mirrored inset on right halves.
    fn number_op(&self, number: i64, side: Side) -> String {
        let text = number.to_string();
        let x = match side {
            Side::Left => self.geom.text_margin,
            Side::Right => {
                self.geom.width
                    - self.geom.text_margin
                    - self.metrics.text_width(&text, self.geom.number_size)
            }
        };
        format!(
            "BT /F1 {:.2} Tf {x:.2} {:.2} Td ({text}) Tj ET\n",
            self.geom.number_size, self.geom.text_margin,
        )
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn placement_op(index: usize, rect: &Rect) -> String {
    format!(
        "q {:.2} 0 0 {:.2} {:.2} {:.2} cm /I{index} Do Q\n",
        rect.width, rect.height, rect.x, rect.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn jpeg_fixture(dir: &std::path::Path, name: &str) -> PathBuf {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 8, 0, 64, 0, 64, 3];
        for i in 0..3u8 {
            bytes.extend_from_slice(&[i + 1, 0x11, 0]);
        }
        bytes.extend_from_slice(&[0xFF, 0xD9]);
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn blank_sheets_still_become_pages() {
        let mut writer = BookletWriter::new(&BookletOptions::default());
        writer.add_sheet(&Sheet::default()).unwrap();
        writer.add_sheet(&Sheet::default()).unwrap();
        assert_eq!(writer.sheet_count(), 2);
        assert_eq!(writer.image_count(), 0);

        let doc = writer.finish();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn repeated_sources_register_once() {
        let dir = tempfile::tempdir().unwrap();
        let page = jpeg_fixture(dir.path(), "page.jpg");
        let half = |n: i64| SheetHalf {
            number: n,
            source: page.clone(),
        };

        let mut writer = BookletWriter::new(&BookletOptions::default());
        writer
            .add_sheet(&Sheet {
                left: Some(half(1)),
                right: Some(half(4)),
            })
            .unwrap();
        writer
            .add_sheet(&Sheet {
                left: Some(half(3)),
                right: None,
            })
            .unwrap();

        assert_eq!(writer.sheet_count(), 2);
        assert_eq!(writer.image_count(), 1);
    }

    #[test]
    fn decode_failures_abort_the_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("page.jpg");
        std::fs::write(&bad, b"not a jpeg").unwrap();

        let mut writer = BookletWriter::new(&BookletOptions::default());
        let result = writer.add_sheet(&Sheet {
            left: Some(SheetHalf {
                number: 1,
                source: bad,
            }),
            right: None,
        });
        assert!(matches!(result, Err(BookletError::CorruptImage { .. })));
    }
}
