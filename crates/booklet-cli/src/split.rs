//! Two-page spread splitting.
//!
//! Scans that captured an open book hold two pages in one landscape image.
//! Splitting saves the right half first (suffix `a`) and the left half
//! second (suffix `b`), the reading order of right-to-left books, then
//! removes the original so a rebuild scan picks up only single pages.

use anyhow::{Context, Result};
use image::GenericImageView;
use std::path::Path;

use crate::scan;

/// Split every landscape image under `root`; returns how many were split.
pub fn split_spreads(root: &Path) -> Result<usize> {
    let mut split = 0;
    for path in scan::page_images(root)? {
        if split_one(&path).with_context(|| path.display().to_string())? {
            split += 1;
        }
    }
    Ok(split)
}

fn split_one(path: &Path) -> Result<bool> {
    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    if width <= height {
        return Ok(false);
    }

    let mid = width / 2;
    img.crop_imm(mid, 0, width - mid, height)
        .save(suffixed(path, "a"))?;
    img.crop_imm(0, 0, mid, height).save(suffixed(path, "b"))?;
    std::fs::remove_file(path)?;
    Ok(true)
}

/// `page01.jpg` + `a` → `page01a.jpg`, beside the original.
fn suffixed(path: &Path, suffix: &str) -> std::path::PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn write_gray(path: &Path, width: u32, height: u32) {
        let img = GrayImage::from_pixel(width, height, Luma([127]));
        img.save(path).unwrap();
    }

    #[test]
    fn wide_images_split_into_right_then_left() {
        let dir = tempfile::tempdir().unwrap();
        let spread = dir.path().join("page01.png");
        write_gray(&spread, 40, 20);

        assert_eq!(split_spreads(dir.path()).unwrap(), 1);
        assert!(!spread.exists());

        let right = image::open(dir.path().join("page01a.png")).unwrap();
        let left = image::open(dir.path().join("page01b.png")).unwrap();
        assert_eq!(right.dimensions(), (20, 20));
        assert_eq!(left.dimensions(), (20, 20));
    }

    #[test]
    fn tall_and_square_images_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let tall = dir.path().join("page02.png");
        let square = dir.path().join("page03.png");
        write_gray(&tall, 20, 40);
        write_gray(&square, 20, 20);

        assert_eq!(split_spreads(dir.path()).unwrap(), 0);
        assert!(tall.exists());
        assert!(square.exists());
    }

    #[test]
    fn odd_widths_lose_no_columns() {
        let dir = tempfile::tempdir().unwrap();
        let spread = dir.path().join("page04.png");
        write_gray(&spread, 41, 20);

        assert_eq!(split_spreads(dir.path()).unwrap(), 1);
        let right = image::open(dir.path().join("page04a.png")).unwrap();
        let left = image::open(dir.path().join("page04b.png")).unwrap();
        assert_eq!(right.dimensions().0 + left.dimensions().0, 41);
    }
}
