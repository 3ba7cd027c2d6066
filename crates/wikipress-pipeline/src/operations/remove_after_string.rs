//! `remove_after_string`: drop everything from a marker onwards.

use serde::Deserialize;

use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_core::{Document, Error, Result};
use wikipress_parser::{remove_after_string, remove_after_string_in_lines};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RemoveAfterStringOptions {
    string: String,
    /// Truncate each line instead of the whole body
    #[serde(default)]
    line: bool,
}

#[derive(Debug, Clone)]
pub struct RemoveAfterString {
    marker: String,
    line: bool,
}

impl RemoveAfterString {
    pub const NAME: &'static str = "remove_after_string";

    pub fn new(marker: impl Into<String>, line: bool) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(Error::invalid_options(Self::NAME, "`string` must not be empty"));
        }
        Ok(Self { marker, line })
    }

    pub fn from_options(_ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let opts: RemoveAfterStringOptions = parse_options(Self::NAME, options)?;
        Self::new(opts.string, opts.line)
    }
}

impl Operation for RemoveAfterString {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
        let body = if self.line {
            remove_after_string_in_lines(&doc.body, &self.marker)?
        } else {
            remove_after_string(&doc.body, &self.marker)?
        };
        Ok(doc.with_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikipress_core::Frontmatter;

    fn run(op: &RemoveAfterString, body: &str) -> String {
        let doc = Document::new("a.md", Frontmatter::default(), body, Vec::new());
        op.apply(doc, &DocumentScope::default()).unwrap().body
    }

    #[test]
    fn test_truncate_document() {
        let op = RemoveAfterString::new("# Registro", false).unwrap();
        assert_eq!(run(&op, "keep\n# Registro\n- 2023"), "keep\n");
    }

    #[test]
    fn test_truncate_lines() {
        let op = RemoveAfterString::new("%%", true).unwrap();
        assert_eq!(run(&op, "a %% hidden\nb"), "a \nb");
    }

    #[test]
    fn test_empty_marker_rejected() {
        assert!(RemoveAfterString::new("", false).unwrap_err().is_config());
    }
}
