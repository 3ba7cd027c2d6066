//! # Wikipress Cite
//!
//! Bibliography support for `[[@key]]` citations:
//!
//! - [`bibtex`] - BibLaTeX / BibTeX files read with the `biblatex` crate
//! - [`entry`] - a typed view of each entry, one variant per entry type
//! - [`render`] - short inline citations and the end-of-note references section
//!
//! ## Example
//!
//! ```
//! use wikipress_cite::{Bibliography, CitationRenderer, DEFAULT_HEADING};
//! use wikipress_core::{Document, Frontmatter};
//!
//! let bib = Bibliography::parse(
//!     "@book{knuth84, author = {Knuth, Donald E.}, title = {The TeXbook}, \
//!      publisher = {Addison-Wesley}, year = 1984}",
//! )
//! .unwrap();
//! let doc = Document::new("TeX.md", Frontmatter::default(), "As in [[@knuth84]].", Vec::new());
//!
//! let body = CitationRenderer::new(&bib, DEFAULT_HEADING).render(&doc).unwrap();
//! assert!(body.starts_with("As in [(Knuth 1984)](tex#knuth84)."));
//! assert!(body.contains("<p id=\"knuth84\">1. Knuth “The TeXbook” Addison-Wesley 1984</p>"));
//! ```

pub mod bibtex;
pub mod entry;
pub mod render;

pub use biblatex::Person;
pub use bibtex::{Bibliography, field, first_field};
pub use entry::{BibEntry, EntryKind};
pub use render::{
    CitationRenderer, DEFAULT_HEADING, format_authors, format_long_date, format_year,
    long_citation, short_citation,
};
