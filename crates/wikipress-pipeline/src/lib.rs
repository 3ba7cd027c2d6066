//! # Wikipress Pipeline
//!
//! Turns discovered notes into site pages:
//!
//! 1. [`discovery`] walks the source roots, splitting notes from images.
//! 2. [`classifier`] sorts each note's references into images, citations,
//!    resolvable notes and dangling references.
//! 3. [`registry`] builds the configured [`Pipeline`] of [`Operation`]s once
//!    per run; unknown names stop the run before any note is read.
//! 4. [`runner`] threads every note through the pipeline in order, then
//!    [`assets`] copies the referenced images.
//!
//! ## Extending
//!
//! ```
//! use wikipress_core::{Document, Result};
//! use wikipress_pipeline::{DocumentScope, Operation, Registry};
//!
//! struct Trim;
//!
//! impl Operation for Trim {
//!     fn name(&self) -> &'static str {
//!         "trim"
//!     }
//!
//!     fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
//!         let body = doc.body.trim().to_string();
//!         Ok(doc.with_body(body))
//!     }
//! }
//!
//! let mut registry = Registry::with_builtins();
//! registry.register("trim", |_, _| Ok(Box::new(Trim) as Box<dyn Operation>));
//! assert!(registry.names().any(|name| name == "trim"));
//! ```

pub mod assets;
pub mod classifier;
pub mod discovery;
pub mod history;
pub mod operation;
pub mod operations;
pub mod registry;
pub mod runner;

pub use assets::{AssetReport, copy_assets, locate_image};
pub use classifier::{Classification, ReferenceClassifier};
pub use discovery::{SourceFiles, discover};
pub use history::{GitHistory, RevisionHistory, interpolate_weight};
pub use operation::{DocumentScope, Operation, RunContext, parse_options};
pub use registry::{Constructor, Pipeline, Registry};
pub use runner::{RunReport, Runner};
