//! Advance-width metrics for the built-in page number face.
//!
//! Page numbers are set in Times-Bold, one of the base fonts every PDF
//! reader supplies, so no font program is embedded, only the resource
//! dictionary naming it. Right-aligned numbers need the exact set width,
//! which comes from the face's advance-width table rather than an
//! approximation.

/// A read-only per-character advance table, in 1/1000 em units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    widths: &'static [u16; 95],
}

/// Times-Bold advances for ASCII 32..=126 (Adobe AFM values).
pub const TIMES_BOLD: FontMetrics = FontMetrics {
    widths: &TIMES_BOLD_WIDTHS,
};

impl FontMetrics {
    /// Advance of one character in 1/1000 em.
    pub fn advance(&self, c: char) -> u16 {
        match u32::from(c) {
            cp @ 0x20..=0x7E => self.widths[(cp - 0x20) as usize],
            // outside the table: the digit/figure width keeps alignment sane
            _ => 500,
        }
    }

    /// Set width of `text` at `size_pt`, in points.
    pub fn text_width(&self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.advance(c))).sum();
        units as f32 * size_pt / 1000.0
    }
}

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278,          // space ! " # $ % & '
    333, 333, 500, 570, 250, 333, 250, 278,           // ( ) * + , - . /
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, // 0-9
    333, 333, 570, 570, 570, 500, 930,                // : ; < = > ? @
    722, 667, 722, 722, 667, 611, 778, 778, 389,      // A-I
    500, 778, 667, 944, 722, 778, 611, 778, 722,      // J-R
    556, 667, 722, 722, 1000, 722, 722, 667,          // S-Z
    333, 278, 333, 581, 500, 333,                     // [ \ ] ^ _ `
    500, 556, 444, 556, 444, 333, 500, 556, 278,      // a-i
    333, 556, 278, 833, 556, 500, 556, 556, 444,      // j-r
    389, 333, 556, 500, 722, 500, 500, 444,           // s-z
    394, 220, 394, 520,                               // { | } ~
];
