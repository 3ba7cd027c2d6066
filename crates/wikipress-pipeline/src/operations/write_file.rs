//! `write_file`: persist the note under the output directory.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_core::{Document, Error, Result};
use wikipress_parser::render_document;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WriteFileOptions {}

/// Writes `---\n<front matter>---\n\n<body>` to `<filesystem>/<path>/<file name>`
#[derive(Debug, Clone)]
pub struct WriteFile {
    directory: PathBuf,
}

impl WriteFile {
    pub const NAME: &'static str = "write_file";

    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn from_options(ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let _: WriteFileOptions = parse_options(Self::NAME, options)?;
        Ok(Self::new(ctx.output().document_dir()))
    }
}

impl Operation for WriteFile {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
        let file_name = doc
            .source()
            .file_name()
            .ok_or_else(|| Error::other(format!("{} has no file name", doc.source().display())))?;
        let target = self.directory.join(file_name);

        fs::create_dir_all(&self.directory)?;
        fs::write(&target, render_document(&doc.metadata, &doc.body)?)?;
        log::debug!("Wrote {}", target.display());
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wikipress_core::Frontmatter;

    #[test]
    fn test_writes_front_matter_and_body() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("content/notes");
        let op = WriteFile::new(&out_dir);

        let metadata = Frontmatter {
            title: Some("Note".into()),
            ..Default::default()
        };
        let doc = Document::new("vault/sub/Note.md", metadata, "Body", Vec::new());
        let returned = op.apply(doc.clone(), &DocumentScope::default()).unwrap();
        assert_eq!(returned, doc);

        let written = fs::read_to_string(out_dir.join("Note.md")).unwrap();
        assert_eq!(written, "---\ntitle: Note\n---\n\nBody");
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let op = WriteFile::new(dir.path());
        let doc = Document::new("a.md", Frontmatter::default(), "first", Vec::new());
        op.apply(doc, &DocumentScope::default()).unwrap();
        let doc = Document::new("a.md", Frontmatter::default(), "second", Vec::new());
        op.apply(doc, &DocumentScope::default()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("a.md")).unwrap(),
            "---\n---\n\nsecond"
        );
    }
}
