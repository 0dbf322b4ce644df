//! Page image discovery and ordering.

use anyhow::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Collect every page image under `root`, recursively, in natural order.
pub fn page_images(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_image = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if is_image {
            paths.push(entry.into_path());
        }
    }

    paths.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
    Ok(paths)
}

/// Order strings the way a person reads filenames: runs of digits compare
/// as numbers, everything else byte-wise. `page2` sorts before `page10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let run_a = digit_run(a, &mut i);
            let run_b = digit_run(b, &mut j);
            let ord = run_a.len().cmp(&run_b.len()).then_with(|| run_a.cmp(run_b));
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                ord => return ord,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Advance past a digit run, returning it with leading zeros stripped.
fn digit_run<'a>(s: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while *pos < s.len() && s[*pos].is_ascii_digit() {
        *pos += 1;
    }
    let run = &s[start..*pos];
    let zeros = run.iter().take_while(|&&b| b == b'0').count();
    &run[zeros.min(run.len().saturating_sub(1))..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn numeric_runs_compare_as_numbers() {
        assert_eq!(
            sorted(vec!["page10.jpg", "page2.jpg", "page1.jpg"]),
            vec!["page1.jpg", "page2.jpg", "page10.jpg"]
        );
    }

    #[test]
    fn zero_padding_does_not_change_the_value() {
        assert_eq!(
            sorted(vec!["p010.png", "p009.png", "p2.png"]),
            vec!["p2.png", "p009.png", "p010.png"]
        );
    }

    #[test]
    fn mixed_runs_alternate_text_and_numbers() {
        assert_eq!(
            sorted(vec!["v2p10.jpg", "v2p9.jpg", "v10p1.jpg", "v2p10a.jpg"]),
            vec!["v2p9.jpg", "v2p10.jpg", "v2p10a.jpg", "v10p1.jpg"]
        );
    }

    #[test]
    fn plain_text_compares_byte_wise() {
        assert_eq!(sorted(vec!["b.png", "a.png"]), vec!["a.png", "b.png"]);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("page", "page1"), Ordering::Less);
    }

    #[test]
    fn scan_finds_nested_images_and_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("ch2");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("p10.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("p9.PNG"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::write(nested.join("p1.jpeg"), b"x").unwrap();

        let paths = page_images(dir.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["p1.jpeg", "p9.PNG", "p10.jpg"]);
    }
}
