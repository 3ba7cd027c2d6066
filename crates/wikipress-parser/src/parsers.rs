//! Note loading plus the individual rewrite layers

use std::fs;
use std::path::Path;
use wikipress_core::{Document, Error, Result};

pub mod embeds;
pub mod external;
pub mod frontmatter_parser;
pub mod link_utils;
pub mod math;
pub mod text;
pub mod wikilinks;

use self::frontmatter_parser::extract_frontmatter;
use self::wikilinks::extract_references;

/// Build a [`Document`] from a note's path and raw content.
///
/// References are taken from the body only, so `[[...]]` inside front
/// matter values is not treated as a link.
pub fn parse_document(path: &Path, content: &str) -> Document {
    let (metadata, body) = extract_frontmatter(content);
    let references = extract_references(body);
    Document::new(path, metadata, body, references)
}

/// Read and parse a note from disk.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_document(path, &content))
}
