//! # Wikipress Core
//!
//! Core data models, error types, and configuration for the note converter.
//! This crate defines the canonical types that all other crates depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - The [`Document`] threaded through the pipeline and its [`Frontmatter`]
//! - [`error`] - Error taxonomy and Result alias
//! - [`config`] - Run configuration (sources, output, pipeline)
//!
//! ## Usage Examples
//!
//! ### Functional document updates
//!
//! ```
//! use wikipress_core::prelude::*;
//!
//! let doc = Document::new("notes/a.md", Frontmatter::default(), "[[b]]", vec!["b".into()]);
//! let doc = doc.with_body("b");
//! assert_eq!(doc.references, vec!["b".to_string()]);
//! ```
//!
//! ### Error Handling
//!
//! ```
//! use wikipress_core::prelude::*;
//!
//! fn check(name: &str) -> Result<()> {
//!     Err(Error::unknown_operation(name))
//! }
//! assert!(check("nope").unwrap_err().is_config());
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::*;
pub use error::{Error, Result};
pub use models::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, OperationConfig, OutputConfig, SourcesConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Document, Frontmatter, Tags};
}
