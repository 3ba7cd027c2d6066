//! `citation_convert`: render `[[@key]]` citations and the references section.

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_cite::{Bibliography, CitationRenderer, DEFAULT_HEADING};
use wikipress_core::{Document, Result};

fn default_heading() -> String {
    DEFAULT_HEADING.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CitationConvertOptions {
    bibfile: PathBuf,
    #[serde(default = "default_heading")]
    heading: String,
}

#[derive(Debug, Clone)]
pub struct CitationConvert {
    bibliography: Arc<Bibliography>,
    heading: String,
}

impl CitationConvert {
    pub const NAME: &'static str = "citation_convert";

    pub fn new(bibliography: Arc<Bibliography>, heading: impl Into<String>) -> Self {
        Self {
            bibliography,
            heading: heading.into(),
        }
    }

    pub fn from_options(ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let opts: CitationConvertOptions = parse_options(Self::NAME, options)?;
        let bibfile = shellexpand::tilde(&opts.bibfile.to_string_lossy()).into_owned();
        let bibliography = ctx.bibliography(&PathBuf::from(bibfile))?;
        Ok(Self::new(bibliography, opts.heading))
    }
}

impl Operation for CitationConvert {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
        let body = CitationRenderer::new(&self.bibliography, &self.heading).render(&doc)?;
        Ok(doc.with_body(body))
    }
}
