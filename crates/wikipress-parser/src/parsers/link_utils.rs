//! Shared utilities for link classification and slug generation.
//!
//! This module provides common functionality used by every rewrite so that
//! images, anchors, citations and note links are told apart the same way
//! everywhere.

/// Image file extensions recognised in embeds and during discovery (case-sensitive).
pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpeg", ".png", ".webp", ".jpg"];

/// What a wiki-link target points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// `@key` bibliography citation
    Citation,
    /// File name ending in an image extension
    Image,
    /// `#Heading` on the current page
    Anchor,
    /// Another note, optionally with `#Heading`
    Note,
}

/// Check if a file name is an image.
pub fn is_image(name: &str) -> bool {
    image_extension(name).is_some()
}

/// The image extension `name` ends with, if any.
pub fn image_extension(name: &str) -> Option<&'static str> {
    IMAGE_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| name.ends_with(ext))
}

/// Convert a string to kebab case: lowercase, apostrophes and spaces become hyphens.
///
/// # Examples
///
/// ```
/// use wikipress_parser::parsers::link_utils::kebab_case;
///
/// assert_eq!(kebab_case("Legge di Coulomb"), "legge-di-coulomb");
/// assert_eq!(kebab_case("L'energia"), "l-energia");
/// ```
pub fn kebab_case(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            '\'' | ' ' => '-',
            other => other,
        })
        .collect()
}

/// Split `target|alias` at the first pipe.
pub fn split_alias(inner: &str) -> (&str, Option<&str>) {
    match inner.split_once('|') {
        Some((target, alias)) => (target, Some(alias)),
        None => (inner, None),
    }
}

/// Drop a `#heading` suffix.
pub fn strip_anchor(target: &str) -> &str {
    match target.find('#') {
        Some(idx) => &target[..idx],
        None => target,
    }
}

/// Classify a wiki-link target (the part before any `|`).
///
/// # Examples
///
/// ```
/// use wikipress_parser::parsers::link_utils::{classify_target, TargetKind};
///
/// assert_eq!(classify_target("@knuth84"), TargetKind::Citation);
/// assert_eq!(classify_target("diagram.png"), TargetKind::Image);
/// assert_eq!(classify_target("#Heading"), TargetKind::Anchor);
/// assert_eq!(classify_target("Note#Heading"), TargetKind::Note);
/// ```
pub fn classify_target(target: &str) -> TargetKind {
    if target.starts_with('@') {
        TargetKind::Citation
    } else if is_image(target) {
        TargetKind::Image
    } else if target.starts_with('#') {
        TargetKind::Anchor
    } else {
        TargetKind::Note
    }
}
