//! Pipeline runner: discovery, per-note processing and asset copying.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::assets::copy_assets;
use crate::classifier::ReferenceClassifier;
use crate::discovery::discover;
use crate::history::{GitHistory, RevisionHistory};
use crate::operation::{DocumentScope, RunContext};
use crate::registry::{Pipeline, Registry};
use wikipress_core::{Config, Result};
use wikipress_parser::load_document;

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Notes that went through the whole pipeline
    pub documents_processed: usize,
    /// Images copied to the asset directory
    pub assets_copied: usize,
    /// Image references with no matching file
    pub assets_missing: Vec<String>,
}

/// Runs one conversion over a configuration
pub struct Runner {
    config: Config,
    registry: Registry,
    history: Arc<dyn RevisionHistory>,
}

impl Runner {
    /// Runner with the built-in operations and git history
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: Registry::with_builtins(),
            history: Arc::new(GitHistory),
        }
    }

    /// Use a custom registry
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom revision history source
    pub fn with_history(mut self, history: Arc<dyn RevisionHistory>) -> Self {
        self.history = history;
        self
    }

    /// Convert every note, then copy referenced images.
    ///
    /// The pipeline is built before any note is touched, so configuration
    /// errors abort the run with no output written. Any error while
    /// processing a note stops the run.
    pub fn run(&self) -> Result<RunReport> {
        self.config.validate()?;

        let mut ctx =
            RunContext::with_history(self.config.output.clone(), Arc::clone(&self.history));
        let pipeline = Pipeline::build(&self.config.pipeline, &self.registry, &mut ctx)?;
        log::info!("Pipeline: {}", pipeline.names().join(" -> "));

        let sources = discover(&self.config.sources.paths, &self.config.sources.images)?;
        let classifier = ReferenceClassifier::new(&sources.notes);

        let mut image_refs = BTreeSet::new();
        let mut report = RunReport::default();

        for path in &sources.notes {
            log::debug!("Processing {}", path.display());
            let doc = load_document(path)?;
            let classification = classifier.classify(&doc.references);
            image_refs.extend(classification.images.iter().cloned());

            let scope = DocumentScope::from(&classification);
            pipeline.apply(doc, &scope)?;
            report.documents_processed += 1;
        }

        let assets = copy_assets(&image_refs, &sources.images, &ctx.output().asset_dir())?;
        report.assets_copied = assets.copied.len();
        report.assets_missing = assets.missing;

        log::info!(
            "Processed {} notes, copied {} images ({} missing)",
            report.documents_processed,
            report.assets_copied,
            report.assets_missing.len()
        );
        Ok(report)
    }
}
