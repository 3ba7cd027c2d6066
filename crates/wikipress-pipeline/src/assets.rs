//! Copies referenced images into the output asset directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use wikipress_core::Result;

/// Outcome of the asset copy step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    pub copied: Vec<PathBuf>,
    /// References with no matching image file
    pub missing: Vec<String>,
}

/// First discovered image whose path contains `reference`.
pub fn locate_image<'a>(reference: &str, images: &'a [PathBuf]) -> Option<&'a Path> {
    images
        .iter()
        .find(|path| path.to_string_lossy().contains(reference))
        .map(PathBuf::as_path)
}

/// Copy each referenced image to `asset_dir/<reference>`.
///
/// The reference keeps its sub-directories so equally named images in
/// different folders do not overwrite each other. Unresolved references are
/// reported and skipped; I/O failures are errors.
pub fn copy_assets(
    references: &BTreeSet<String>,
    images: &[PathBuf],
    asset_dir: &Path,
) -> Result<AssetReport> {
    let mut report = AssetReport::default();

    for reference in references {
        let Some(source) = locate_image(reference, images) else {
            log::warn!("Image '{reference}' not found in any image directory");
            report.missing.push(reference.clone());
            continue;
        };

        let target = asset_dir.join(reference);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target)?;
        log::debug!("Copied {} -> {}", source.display(), target.display());
        report.copied.push(target);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_and_missing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("attachments/fisica");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("campo.png"), b"png").unwrap();
        let images = vec![src.join("campo.png")];

        let refs = BTreeSet::from(["fisica/campo.png".to_string(), "ghost.jpg".to_string()]);
        let out = dir.path().join("site/images");
        let report = copy_assets(&refs, &images, &out).unwrap();

        assert_eq!(report.copied, vec![out.join("fisica/campo.png")]);
        assert_eq!(report.missing, vec!["ghost.jpg".to_string()]);
        assert_eq!(fs::read(out.join("fisica/campo.png")).unwrap(), b"png");
    }

    #[test]
    fn test_locate_by_substring() {
        let images = vec![PathBuf::from("a/x.png"), PathBuf::from("b/y.png")];
        assert_eq!(locate_image("y.png", &images), Some(Path::new("b/y.png")));
        assert_eq!(locate_image("z.png", &images), None);
    }
}
