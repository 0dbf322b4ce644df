use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("corrupt image {}: {reason}", .path.display())]
    CorruptImage { path: PathBuf, reason: String },
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("page count {0} is not a multiple of four")]
    UnpaddedPageCount(usize),
    #[error("no pages to lay out")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// One logical position in the padded page sequence.
///
/// `number` is the logical page number; it can be zero or negative for
/// blanks pre-pended before page 1. `source` is `None` for a blank page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlot {
    pub number: i64,
    pub source: Option<PathBuf>,
}

impl PageSlot {
    /// Build the padded slot sequence for one booklet: `leading_blanks`
    /// blanks, the ordered page images, then trailing blanks up to the next
    /// multiple of four. Slots are numbered so the first image is page 1.
    pub fn sequence(paths: Vec<PathBuf>, leading_blanks: usize) -> Vec<PageSlot> {
        let unpadded = leading_blanks + paths.len();
        let trailing = (4 - unpadded % 4) % 4;

        let sources = std::iter::repeat_n(None, leading_blanks)
            .chain(paths.into_iter().map(Some))
            .chain(std::iter::repeat_n(None, trailing));

        sources
            .enumerate()
            .map(|(i, source)| PageSlot {
                number: i as i64 + 1 - leading_blanks as i64,
                source,
            })
            .collect()
    }
}

/// A page resolved onto one half of a physical sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHalf {
    pub number: i64,
    pub source: PathBuf,
}

/// One physical output page: a left and a right half, either possibly blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sheet {
    pub left: Option<SheetHalf>,
    pub right: Option<SheetHalf>,
}

/// Planner output: the sheet sequences for the two duplex documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imposition {
    pub back: Vec<Sheet>,
    pub front: Vec<Sheet>,
}

/// Counts describing one booklet build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Page images supplied by the caller
    pub source_pages: usize,
    /// Blanks pre-pended before page 1
    pub leading_blanks: usize,
    /// Blanks appended to reach a multiple of four
    pub padding_blanks: usize,
    /// Total slots after padding
    pub total_slots: usize,
    /// Physical pages in each of the two output documents
    pub sheets_per_side: usize,
}
