//! `link_convert`: external auto-links, dangling-reference stripping, image
//! embeds and wiki links.

use serde::Deserialize;

use crate::operation::{DocumentScope, Operation, RunContext, parse_options};
use wikipress_core::{Document, Result};
use wikipress_parser::{
    autolink_external, convert_images, convert_links, filter_links, markdown_links_to_anchors,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkConvertOptions {
    /// Also render every markdown link as an HTML anchor
    #[serde(default)]
    html_anchors: bool,
}

/// Rewrites links and image embeds for the static site
#[derive(Debug, Clone)]
pub struct LinkConvert {
    link_base: String,
    image_base: String,
    html_anchors: bool,
}

impl LinkConvert {
    pub const NAME: &'static str = "link_convert";

    pub fn new(link_base: impl Into<String>, image_base: impl Into<String>) -> Self {
        Self {
            link_base: link_base.into(),
            image_base: image_base.into(),
            html_anchors: false,
        }
    }

    pub fn from_options(ctx: &mut RunContext, options: &serde_yaml::Mapping) -> Result<Self> {
        let opts: LinkConvertOptions = parse_options(Self::NAME, options)?;
        let output = ctx.output();
        Ok(Self {
            html_anchors: opts.html_anchors,
            ..Self::new(output.link_base(), output.image_base())
        })
    }
}

impl Operation for LinkConvert {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, doc: Document, scope: &DocumentScope) -> Result<Document> {
        let mut body = autolink_external(&doc.body);
        if !doc.references.is_empty() {
            body = filter_links(&body, &scope.uncited);
            body = convert_images(&body, &self.image_base);
            body = convert_links(&body, &self.link_base);
        }
        if self.html_anchors {
            body = markdown_links_to_anchors(&body, "");
        }
        Ok(doc.with_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use wikipress_core::Frontmatter;

    fn doc(body: &str) -> Document {
        let refs = wikipress_parser::extract_references(body);
        Document::new("notes/a.md", Frontmatter::default(), body, refs)
    }

    #[test]
    fn test_full_rewrite() {
        let op = LinkConvert::new("/notes", "/images");
        let scope = DocumentScope {
            uncited: BTreeSet::from(["Ghost".to_string()]),
        };
        let out = op
            .apply(
                doc("[[Ghost]] [[Real Note]] ![[fig.png|200]] https://x.org [[@key]]"),
                &scope,
            )
            .unwrap();
        assert_eq!(
            out.body,
            r#"Ghost [Real Note](/notes/real-note) <img src="/images/fig.png" width="200" alt="fig"> [https://x.org](https://x.org) [[@key]]"#
        );
    }

    #[test]
    fn test_no_references_only_autolinks() {
        let op = LinkConvert::new("/notes", "/images");
        let out = op
            .apply(doc("see https://x.org"), &DocumentScope::default())
            .unwrap();
        assert_eq!(out.body, "see [https://x.org](https://x.org)");
    }

    #[test]
    fn test_html_anchors() {
        let op = LinkConvert {
            html_anchors: true,
            ..LinkConvert::new("/notes", "/images")
        };
        let out = op.apply(doc("[[Note]]"), &DocumentScope::default()).unwrap();
        assert_eq!(out.body, r#"<a href="/notes/note">Note</a>"#);
    }
}
