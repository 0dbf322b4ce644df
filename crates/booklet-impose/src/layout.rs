//! Sheet geometry and aspect-preserving image placement.

use crate::constants::mm_to_pt;
use crate::options::BookletOptions;
use crate::types::*;

/// A rectangular area in points, y-up (PDF page space)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }
}

/// The fixed page-space layout of one output sheet, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub width: f32,
    pub height: f32,
    pub image_margin: f32,
    pub text_margin: f32,
    pub number_size: f32,
}

impl SheetGeometry {
    pub fn from_options(options: &BookletOptions) -> Self {
        Self {
            width: mm_to_pt(options.sheet_width_mm),
            height: mm_to_pt(options.sheet_height_mm),
            image_margin: mm_to_pt(options.image_margin_mm),
            text_margin: mm_to_pt(options.text_margin_mm),
            number_size: options.number_size_pt,
        }
    }

    /// Left half-sheet region
    pub fn left_region(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width / 2.0, self.height)
    }

    /// Right half-sheet region
    pub fn right_region(&self) -> Rect {
        Rect::new(self.width / 2.0, 0.0, self.width / 2.0, self.height)
    }
}

/// Fit an image into `region` inset by `margin` on all four sides.
///
/// The image keeps its aspect ratio: if it is proportionally wider than the
/// drawable area it spans the full drawable width and is centered
/// vertically, otherwise it spans the full drawable height and is centered
/// horizontally. The result always lies inside the inset region.
pub fn fit_image(image_w: f32, image_h: f32, region: Rect, margin: f32) -> Result<Rect> {
    if image_w <= 0.0 || image_h <= 0.0 {
        return Err(BookletError::InvalidGeometry(format!(
            "image dimensions {image_w}x{image_h} are not positive"
        )));
    }
    if region.width <= 0.0 || region.height <= 0.0 {
        return Err(BookletError::InvalidGeometry(format!(
            "region dimensions {}x{} are not positive",
            region.width, region.height
        )));
    }
    if margin < 0.0 || margin * 2.0 >= region.width || margin * 2.0 >= region.height {
        return Err(BookletError::InvalidGeometry(format!(
            "margin {margin} leaves no drawable area in {}x{} region",
            region.width, region.height
        )));
    }

    let drawable_w = region.width - 2.0 * margin;
    let drawable_h = region.height - 2.0 * margin;
    let image_ratio = image_w / image_h;

    let (w, h) = if image_ratio > drawable_w / drawable_h {
        (drawable_w, drawable_w / image_ratio)
    } else {
        (drawable_h * image_ratio, drawable_h)
    };

    Ok(Rect::new(
        region.x + margin + (drawable_w - w) / 2.0,
        region.y + margin + (drawable_h - h) / 2.0,
        w,
        h,
    ))
}
