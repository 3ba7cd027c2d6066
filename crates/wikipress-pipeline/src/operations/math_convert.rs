//! `math_convert`: math delimiter normalization, plus escaping for KaTeX.

use serde::Deserialize;

use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_core::{Document, Result};
use wikipress_parser::{escape_katex, normalize_math};

/// Target math renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathEngine {
    #[default]
    Mathjax,
    Katex,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MathConvertOptions {
    #[serde(default)]
    engine: MathEngine,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MathConvert {
    engine: MathEngine,
}

impl MathConvert {
    pub const NAME: &'static str = "math_convert";

    pub fn new(engine: MathEngine) -> Self {
        Self { engine }
    }

    pub fn from_options(_ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let opts: MathConvertOptions = parse_options(Self::NAME, options)?;
        Ok(Self::new(opts.engine))
    }
}

impl Operation for MathConvert {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
        let body = normalize_math(&doc.body);
        let body = match self.engine {
            MathEngine::Mathjax => body,
            MathEngine::Katex => escape_katex(&body),
        };
        Ok(doc.with_body(body))
    }
}
