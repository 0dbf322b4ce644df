//! End-to-end build: ordered page images in, two documents out.

use crate::options::BookletOptions;
use crate::plan::plan;
use crate::render::BookletWriter;
use crate::types::*;
use lopdf::Document;
use std::path::PathBuf;

/// The two finished documents of one build.
pub struct BookletBuild {
    /// Sheet sides printed first (outer spreads working inward)
    pub back: Document,
    /// Sheet sides printed second (inner spreads working outward)
    pub front: Document,
}

/// Build both booklet documents from an ordered list of page images.
///
/// The two documents share nothing once planned, so they render as two
/// independent blocking tasks. Any failure aborts the whole build; no
/// partial document is returned.
pub async fn build(paths: Vec<PathBuf>, options: &BookletOptions) -> Result<BookletBuild> {
    options.validate()?;

    let slots = PageSlot::sequence(paths, options.leading_blanks);
    if slots.is_empty() {
        return Err(BookletError::NoPages);
    }
    let Imposition { back, front } = plan(&slots)?;

    let back_options = options.clone();
    let front_options = options.clone();
    let back_task = tokio::task::spawn_blocking(move || render_side(&back, &back_options));
    let front_task = tokio::task::spawn_blocking(move || render_side(&front, &front_options));
    let (back, front) = tokio::try_join!(back_task, front_task)?;

    Ok(BookletBuild {
        back: back?,
        front: front?,
    })
}

/// Render one document side, sheet by sheet.
pub fn render_side(sheets: &[Sheet], options: &BookletOptions) -> Result<Document> {
    let mut writer = BookletWriter::new(options);
    for sheet in sheets {
        writer.add_sheet(sheet)?;
    }
    Ok(writer.finish())
}
