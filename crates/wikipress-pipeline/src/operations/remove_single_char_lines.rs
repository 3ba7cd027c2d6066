//! `remove_single_char_lines`: drop separator lines such as `---` or `***`.

use serde::Deserialize;

use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_core::{Document, Error, Result};
use wikipress_parser::remove_single_char_lines;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RemoveSingleCharLinesOptions {
    character: String,
}

#[derive(Debug, Clone)]
pub struct RemoveSingleCharLines {
    character: String,
}

impl RemoveSingleCharLines {
    pub const NAME: &'static str = "remove_single_char_lines";

    pub fn new(character: impl Into<String>) -> Result<Self> {
        let character = character.into();
        if character.chars().count() != 1 {
            return Err(Error::invalid_options(
                Self::NAME,
                format!("`character` must be a single character, got {character:?}"),
            ));
        }
        Ok(Self { character })
    }

    pub fn from_options(_ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let opts: RemoveSingleCharLinesOptions = parse_options(Self::NAME, options)?;
        Self::new(opts.character)
    }
}

impl Operation for RemoveSingleCharLines {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
        let body = remove_single_char_lines(&doc.body, &self.character)?;
        Ok(doc.with_body(body))
    }
}
