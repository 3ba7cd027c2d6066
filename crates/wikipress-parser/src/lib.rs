//! # Wikipress Parser
//!
//! Pattern library for wiki-style notes. Every function here is a pure
//! text-to-text rewrite or a read-only extraction; the pipeline crate decides
//! when each one runs.
//!
//! ## Architecture
//!
//! All `[[...]]` handling goes through one tokenizer in [`scanner`]: text is
//! split into literal runs and link spans first, then each rewrite renders
//! the spans it owns and copies everything else through. Math delimiters get
//! the same treatment with their own scanner, so `$$` content is never
//! promoted twice.
//!
//! ## Quick Start
//!
//! ```
//! use std::path::Path;
//! use wikipress_parser::{convert_images, convert_links, normalize_math, parse_document};
//!
//! let content = "---\ntitle: Coulomb\n---\nSee [[Campo elettrico]], ![[fig.png|300]] and $F = qE$.";
//! let doc = parse_document(Path::new("Legge di Coulomb.md"), content);
//! assert_eq!(doc.references, vec!["Campo elettrico", "fig.png|300"]);
//!
//! let body = convert_images(&doc.body, "/images");
//! let body = convert_links(&body, "/notes");
//! let body = normalize_math(&body);
//! assert_eq!(
//!     body,
//!     r#"See [Campo elettrico](/notes/campo-elettrico), <img src="/images/fig.png" width="300" alt="fig"> and $$F = qE$$."#
//! );
//! ```
//!
//! ## Supported syntax
//!
//! - Links: `[[Note]]`, `[[Note|Alias]]`, `[[Note#Heading]]`, `[[#Heading]]`
//! - Image embeds: `![[a.png]]`, `![[a.png|300]]`, `![[a.png|Caption]]`
//! - Citations: `[[@key]]` (rendered by `wikipress-cite`)
//! - Math: `$inline$`, `$$block$$`
//! - Front matter between `---` delimiters
//! - Bare `http(s)://` URLs

pub mod parsers;
pub mod scanner;

pub use parsers::embeds::{ImageForm, convert_images};
pub use parsers::external::{autolink_external, join_url, markdown_links_to_anchors};
pub use parsers::frontmatter_parser::{
    extract_frontmatter, parse_frontmatter, render_document, split_frontmatter,
};
pub use parsers::link_utils::{
    IMAGE_EXTENSIONS, TargetKind, classify_target, is_image, kebab_case, split_alias,
    strip_anchor,
};
pub use parsers::math::{escape_katex, normalize_math};
pub use parsers::text::{
    remove_after_string, remove_after_string_in_lines, remove_single_char_lines,
};
pub use parsers::wikilinks::{convert_links, extract_references, filter_links};
pub use parsers::{load_document, parse_document};
pub use scanner::{Segment, WikiLink};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::parsers::link_utils::{is_image, kebab_case};
    pub use crate::scanner::WikiLink;
    pub use crate::{
        autolink_external, convert_images, convert_links, extract_references, filter_links,
        load_document, normalize_math, parse_document, render_document,
    };
}
