//! The operation seam: per-note transforms and the state they share.

use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::classifier::Classification;
use crate::history::{GitHistory, RevisionHistory};
use wikipress_cite::Bibliography;
use wikipress_core::{Document, Error, OutputConfig, Result};

/// What an operation knows about the note it is applied to beyond the document itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentScope {
    /// References of this note that resolve to nothing
    pub uncited: BTreeSet<String>,
}

impl From<&Classification> for DocumentScope {
    fn from(classification: &Classification) -> Self {
        Self {
            uncited: classification.uncited.clone(),
        }
    }
}

/// One configured step of the pipeline.
///
/// Operations take the document by value and return the next version;
/// only terminal steps such as `write_file` touch the filesystem.
pub trait Operation {
    /// Registry name
    fn name(&self) -> &'static str;

    /// Transform one document
    fn apply(&self, doc: Document, scope: &DocumentScope) -> Result<Document>;
}

/// Run-scoped state handed to operation constructors
pub struct RunContext {
    output: OutputConfig,
    bibliographies: HashMap<PathBuf, Arc<Bibliography>>,
    history: Arc<dyn RevisionHistory>,
}

impl RunContext {
    /// Context reading revision history from git
    pub fn new(output: OutputConfig) -> Self {
        Self::with_history(output, Arc::new(GitHistory))
    }

    /// Context with a custom revision history source
    pub fn with_history(output: OutputConfig, history: Arc<dyn RevisionHistory>) -> Self {
        Self {
            output,
            bibliographies: HashMap::new(),
            history,
        }
    }

    /// Output configuration of the run
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Revision history source
    pub fn history(&self) -> Arc<dyn RevisionHistory> {
        Arc::clone(&self.history)
    }

    /// Bibliography at `path`, parsed on first request and shared afterwards.
    pub fn bibliography(&mut self, path: &Path) -> Result<Arc<Bibliography>> {
        if let Some(bib) = self.bibliographies.get(path) {
            return Ok(Arc::clone(bib));
        }
        let bib = Arc::new(Bibliography::load(path)?);
        self.bibliographies
            .insert(path.to_path_buf(), Arc::clone(&bib));
        Ok(bib)
    }

    /// Number of distinct bibliographies loaded so far
    pub fn loaded_bibliographies(&self) -> usize {
        self.bibliographies.len()
    }
}

/// Deserialize an operation's options mapping into its typed record.
pub fn parse_options<T: DeserializeOwned>(
    operation: &str,
    options: &serde_yaml::Mapping,
) -> Result<T> {
    serde_yaml::from_value(serde_yaml::Value::Mapping(options.clone()))
        .map_err(|e| Error::invalid_options(operation, e.to_string()))
}
