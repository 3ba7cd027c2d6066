//! Source discovery: notes and images under the configured roots.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wikipress_core::{Error, Result};
use wikipress_parser::is_image;

/// Files found under the source roots, each list sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFiles {
    /// Every non-image file under the note roots
    pub notes: Vec<PathBuf>,
    /// Every image file under the image roots
    pub images: Vec<PathBuf>,
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn walk(root: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::file_not_found(root));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| Error::other(format!("Cannot walk {}: {e}", root.display())))?;
        if entry.file_type().is_file() && keep(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Walk note and image roots.
///
/// Hidden files and directories (such as `.obsidian/`) are skipped. A root
/// that does not exist is an error.
pub fn discover(note_roots: &[PathBuf], image_roots: &[PathBuf]) -> Result<SourceFiles> {
    let mut sources = SourceFiles::default();
    for root in note_roots {
        sources.notes.extend(walk(root, |name| !is_image(name))?);
    }
    for root in image_roots {
        sources.images.extend(walk(root, is_image)?);
    }
    sources.notes.sort();
    sources.notes.dedup();
    sources.images.sort();
    sources.images.dedup();
    log::info!(
        "Discovered {} notes and {} images",
        sources.notes.len(),
        sources.images.len()
    );
    Ok(sources)
}
