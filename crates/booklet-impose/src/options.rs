use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet build configuration.
///
/// The defaults reproduce the fixed geometry of the tool this library was
/// built for: an A4 landscape sheet split into two page halves, a 4.2mm
/// margin around each image, and 12pt page numbers inset 7mm from the
/// bottom and outer edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookletOptions {
    /// Blank pages inserted before the first image
    pub leading_blanks: usize,

    /// Physical sheet width in millimeters (landscape: width > height)
    pub sheet_width_mm: f32,
    /// Physical sheet height in millimeters
    pub sheet_height_mm: f32,

    /// Margin around each embedded image, per half-sheet
    pub image_margin_mm: f32,
    /// Inset of page numbers from the bottom and the outer side edge
    pub text_margin_mm: f32,
    /// Page number font size in points
    pub number_size_pt: f32,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            leading_blanks: 0,
            sheet_width_mm: DEFAULT_SHEET_WIDTH_MM,
            sheet_height_mm: DEFAULT_SHEET_HEIGHT_MM,
            image_margin_mm: DEFAULT_IMAGE_MARGIN_MM,
            text_margin_mm: DEFAULT_TEXT_MARGIN_MM,
            number_size_pt: DEFAULT_NUMBER_SIZE_PT,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.sheet_width_mm <= 0.0 || self.sheet_height_mm <= 0.0 {
            return Err(BookletError::Config(
                "Sheet dimensions must be positive".to_string(),
            ));
        }

        if self.image_margin_mm < 0.0 || self.text_margin_mm < 0.0 {
            return Err(BookletError::Config("Margins must not be negative".to_string()));
        }

        // Each image lands on half the sheet width; the margin must leave a
        // drawable area on both axes.
        if self.image_margin_mm * 2.0 >= self.sheet_width_mm / 2.0
            || self.image_margin_mm * 2.0 >= self.sheet_height_mm
        {
            return Err(BookletError::Config(
                "Image margin leaves no drawable area".to_string(),
            ));
        }

        if self.number_size_pt <= 0.0 {
            return Err(BookletError::Config(
                "Page number font size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
