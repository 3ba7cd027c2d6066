//! Front matter extraction and rendering: `---\nYAML\n---`

use regex::Regex;
use std::sync::LazyLock;
use wikipress_core::{Error, Frontmatter, Result};

/// Matches a leading YAML block; group 1 is the YAML text (absent when empty)
static FRONTMATTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---[ \t]*\r?\n(?:([\s\S]*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Split content into (front matter YAML, body).
///
/// Returns `None` for the YAML when the content does not open with a
/// closed `---` block, in which case the body is the whole input.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    match FRONTMATTER_PATTERN.captures(content) {
        Some(caps) => {
            let yaml = caps.get(1).map_or("", |m| m.as_str());
            let end = caps.get(0).map_or(0, |m| m.end());
            (Some(yaml), &content[end..])
        }
        None => (None, content),
    }
}

/// Parse front matter YAML into [`Frontmatter`].
pub fn parse_frontmatter(yaml: &str) -> Result<Frontmatter> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| Error::parse_error(format!("invalid front matter: {e}")))
}

/// Extract front matter and body from note content.
///
/// Malformed YAML is logged and treated as empty front matter so a single
/// bad header does not stop a run.
pub fn extract_frontmatter(content: &str) -> (Frontmatter, &str) {
    let (yaml, body) = split_frontmatter(content);
    let metadata = match yaml.map(parse_frontmatter) {
        Some(Ok(metadata)) => metadata,
        Some(Err(e)) => {
            log::warn!("{e}; using empty front matter");
            Frontmatter::default()
        }
        None => Frontmatter::default(),
    };
    (metadata, body)
}

/// Serialize front matter and body back into a note.
///
/// The output always opens with a `---` block, followed by a blank line and
/// the body.
pub fn render_document(metadata: &Frontmatter, body: &str) -> Result<String> {
    let yaml = if metadata.is_empty() {
        String::new()
    } else {
        serde_yaml::to_string(metadata)
            .map_err(|e| Error::parse_error(format!("cannot serialize front matter: {e}")))?
    };
    Ok(format!("---\n{yaml}---\n\n{body}"))
}
