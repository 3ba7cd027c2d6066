//! `update_frontmatter`: site metadata derived from the source file.

use serde::Deserialize;
use std::sync::Arc;

use crate::history::{RevisionHistory, interpolate_weight};
use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_core::{Document, Error, Frontmatter, Result, Tags};
use wikipress_parser::kebab_case;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UpdateFrontmatterOptions {
    /// Static keys added to every note
    #[serde(default)]
    frontmatter: serde_yaml::Mapping,
    /// Start from the note's own front matter instead of an empty one
    #[serde(default)]
    keep_existing: bool,
    /// Set `weight` from the last commit date of the source file
    #[serde(default)]
    weight_from_history: bool,
}

/// Sets `title`, `permalink`, `tags` and optionally `weight`
pub struct UpdateFrontmatter {
    template: Frontmatter,
    permalink_prefix: String,
    keep_existing: bool,
    history: Option<Arc<dyn RevisionHistory>>,
}

impl UpdateFrontmatter {
    pub const NAME: &'static str = "update_frontmatter";

    pub fn new(template: Frontmatter, permalink_prefix: impl Into<String>) -> Self {
        Self {
            template,
            permalink_prefix: permalink_prefix.into(),
            keep_existing: false,
            history: None,
        }
    }

    /// Start from each note's own front matter
    pub fn keep_existing(mut self, keep: bool) -> Self {
        self.keep_existing = keep;
        self
    }

    /// Derive `weight` from revision history
    pub fn with_history(mut self, history: Arc<dyn RevisionHistory>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn from_options(ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let opts: UpdateFrontmatterOptions = parse_options(Self::NAME, options)?;
        let template: Frontmatter =
            serde_yaml::from_value(serde_yaml::Value::Mapping(opts.frontmatter))
                .map_err(|e| Error::invalid_options(Self::NAME, format!("frontmatter: {e}")))?;

        let op = Self::new(template, ctx.output().path.clone()).keep_existing(opts.keep_existing);
        Ok(if opts.weight_from_history {
            op.with_history(ctx.history())
        } else {
            op
        })
    }
}

impl Operation for UpdateFrontmatter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
        let stem = doc.stem();
        let base = if self.keep_existing {
            doc.metadata.clone()
        } else {
            Frontmatter::default()
        };
        let mut metadata = base.merge(self.template.clone());

        metadata.title = Some(stem.clone());
        metadata.permalink = Some(kebab_case(&format!("{}/{}", self.permalink_prefix, stem)));
        if let Some(language) = &doc.metadata.language {
            metadata.tags = Some(Tags::One(language.clone()));
        }

        if let Some(history) = &self.history {
            match history.last_commit_date(doc.source())? {
                Some(date) => metadata.weight = Some(interpolate_weight(date)),
                None => log::debug!("No revision history for {}", doc.source().display()),
            }
        }

        Ok(doc.with_metadata(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MAX_WEIGHT;
    use chrono::{DateTime, FixedOffset};
    use std::path::Path;

    struct FixedHistory(Option<&'static str>);

    impl RevisionHistory for FixedHistory {
        fn last_commit_date(&self, _path: &Path) -> Result<Option<DateTime<FixedOffset>>> {
            Ok(self.0.map(|d| DateTime::parse_from_rfc3339(d).unwrap()))
        }
    }

    fn note() -> Document {
        let metadata = Frontmatter {
            language: Some("italian".into()),
            summary: Some("old".into()),
            ..Default::default()
        };
        Document::new("vault/Legge di Coulomb.md", metadata, "body", Vec::new())
    }

    fn template() -> Frontmatter {
        serde_yaml::from_str("layout: page").unwrap()
    }

    #[test]
    fn test_replaces_metadata() {
        let op = UpdateFrontmatter::new(template(), "content/Fisica");
        let out = op.apply(note(), &DocumentScope::default()).unwrap();
        let fm = &out.metadata;
        assert_eq!(fm.title.as_deref(), Some("Legge di Coulomb"));
        assert_eq!(fm.permalink.as_deref(), Some("content/fisica/legge-di-coulomb"));
        assert_eq!(fm.tags, Some(Tags::One("italian".into())));
        assert_eq!(
            fm.extra.get("layout"),
            Some(&serde_yaml::Value::String("page".into()))
        );
        assert_eq!(fm.summary, None);
        assert_eq!(fm.weight, None);
    }

    #[test]
    fn test_keep_existing() {
        let op = UpdateFrontmatter::new(template(), "notes").keep_existing(true);
        let out = op.apply(note(), &DocumentScope::default()).unwrap();
        assert_eq!(out.metadata.summary.as_deref(), Some("old"));
        assert_eq!(out.metadata.language.as_deref(), Some("italian"));
    }

    #[test]
    fn test_weight_from_history() {
        let op = UpdateFrontmatter::new(Frontmatter::default(), "notes")
            .with_history(Arc::new(FixedHistory(Some("2017-01-01T00:00:00Z"))));
        let out = op.apply(note(), &DocumentScope::default()).unwrap();
        assert_eq!(out.metadata.weight, Some(MAX_WEIGHT));

        let op = UpdateFrontmatter::new(Frontmatter::default(), "notes")
            .with_history(Arc::new(FixedHistory(None)));
        let out = op.apply(note(), &DocumentScope::default()).unwrap();
        assert_eq!(out.metadata.weight, None);
    }
}
