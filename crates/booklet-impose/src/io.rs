//! Document output.

use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Serialize and write a finished document.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, BookletError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Output paths beside the input directory: `<stem>-back.pdf` and
/// `<stem>-front.pdf`.
pub fn sibling_outputs(input: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("booklet");
    (
        input.with_file_name(format!("{stem}-back.pdf")),
        input.with_file_name(format!("{stem}-front.pdf")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_sit_beside_the_input() {
        let (back, front) = sibling_outputs(Path::new("/scans/vol1"));
        assert_eq!(back, Path::new("/scans/vol1-back.pdf"));
        assert_eq!(front, Path::new("/scans/vol1-front.pdf"));
    }

    #[test]
    fn trailing_extension_is_treated_as_a_stem_suffix() {
        let (back, _) = sibling_outputs(Path::new("/scans/vol.1"));
        assert_eq!(back, Path::new("/scans/vol-back.pdf"));
    }
}
