//! # Wikipress
//!
//! Converts a personal wiki of bracket-linked markdown notes into markdown a
//! static site generator can serve: wiki links become site links, image
//! embeds become HTML, inline math is promoted to block math, `[[@key]]`
//! citations are rendered against a bibliography, and front matter gets
//! site metadata.
//!
//! ## Crates
//!
//! - [`wikipress_core`] - configuration, errors, the [`Document`](wikipress_core::Document) model
//! - [`wikipress_parser`] - the text rewrites
//! - [`wikipress_cite`] - bibliography reading and citation rendering
//! - [`wikipress_pipeline`] - reference classification, operations and the runner
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = wikipress::convert_file(Path::new("config.yaml"))?;
//! println!("{} notes converted", report.documents_processed);
//! # Ok::<(), wikipress::Error>(())
//! ```

use std::path::Path;

pub use wikipress_cite;
pub use wikipress_core;
pub use wikipress_parser;
pub use wikipress_pipeline;

pub use wikipress_core::{Config, Error, Result};
pub use wikipress_pipeline::{RunReport, Runner};

/// Run the configured pipeline over every discovered note.
pub fn convert(config: Config) -> Result<RunReport> {
    Runner::new(config).run()
}

/// Load a YAML configuration file and run it.
pub fn convert_file(path: &Path) -> Result<RunReport> {
    convert(Config::load(path)?)
}
