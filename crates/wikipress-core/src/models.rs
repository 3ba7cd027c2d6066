//! Core data models threaded through the conversion pipeline.
//!
//! These types are designed to be:
//! - **Serializable**: front matter round-trips through YAML
//! - **Immutable by hand-off**: operations consume a [`Document`] and return a new one
//! - **Type-Safe**: well-known front matter keys are named fields

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// `tags` may be written as a single string or as a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Tags {
    One(String),
    Many(Vec<String>),
}

/// Front matter of a note.
///
/// Keys the site generator understands are typed fields; everything else is
/// kept verbatim in `extra` so unknown keys survive the conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keys without a dedicated field
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Frontmatter {
    /// True when no key is set
    pub fn is_empty(&self) -> bool {
        *self == Frontmatter::default()
    }

    /// Overlay every key set in `other` onto `self`.
    pub fn merge(mut self, other: Frontmatter) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        overlay!(title, tags, permalink, url, weight, language, summary, description);
        self.extra.extend(other.extra);
        self
    }
}

/// The per-note unit of work.
///
/// `references` is extracted once when the note is loaded and never
/// re-derived, even after `body` has been rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Front matter
    pub metadata: Frontmatter,
    /// Content after the front matter
    pub body: String,
    /// Raw `[[...]]` targets in source order, duplicates included
    pub references: Vec<String>,
    /// Originating file
    pub source: PathBuf,
}

impl Document {
    /// Create a new document
    pub fn new(
        source: impl Into<PathBuf>,
        metadata: Frontmatter,
        body: impl Into<String>,
        references: Vec<String>,
    ) -> Self {
        Self {
            metadata,
            body: body.into(),
            references,
            source: source.into(),
        }
    }

    /// Same document with a rewritten body
    pub fn with_body(self, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..self
        }
    }

    /// Same document with replaced front matter
    pub fn with_metadata(self, metadata: Frontmatter) -> Self {
        Self { metadata, ..self }
    }

    /// Source file name without its last extension (`my.note.md` -> `my.note`)
    pub fn stem(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        remove_extension(&name).to_string()
    }

    /// Title from front matter, falling back to the file stem
    pub fn title(&self) -> String {
        self.metadata.title.clone().unwrap_or_else(|| self.stem())
    }

    /// Source path as given by discovery
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Strip the last extension from a file name.
pub fn remove_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}
