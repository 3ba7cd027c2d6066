//! Wikilink rewrites: `[[Note]]`, `[[Note|alias]]`, `[[#Heading]]`, `[[Note#Heading]]`
//!
//! Links to other notes become markdown links under a base URL, anchor-only
//! links point at the current page, and dangling references are reduced to
//! plain text. Image embeds and `[[@key]]` citations are left for their own
//! rewrites.

use std::collections::BTreeSet;

use crate::parsers::link_utils::{TargetKind, classify_target, kebab_case, strip_anchor};
use crate::scanner::{self, WikiLink};

/// Every raw `[[...]]` inner text in source order, duplicates included.
///
/// Embeds contribute their inner text as well (`![[a.png]]` yields `a.png`).
pub fn extract_references(content: &str) -> Vec<String> {
    scanner::links(content)
        .map(|link| link.inner.to_string())
        .collect()
}

/// Convert wiki links to markdown links.
///
/// `[[target]]` becomes `[target](base/kebab(target))`, `[[target|alias]]`
/// shows the alias but still slugs the target, and `[[#anchor]]` links to
/// `#anchor` on the current page without the base.
pub fn convert_links(content: &str, base: &str) -> String {
    scanner::rewrite(content, |link| render_link(link, base))
}

fn render_link(link: &WikiLink<'_>, base: &str) -> Option<String> {
    let target = link.target();
    let display = link.alias().unwrap_or(target);

    match classify_target(target) {
        TargetKind::Citation => None,
        TargetKind::Image if link.embed => None,
        TargetKind::Anchor => Some(format!("[{}]({})", display, kebab_case(target))),
        TargetKind::Image | TargetKind::Note => Some(format!(
            "[{}]({}/{})",
            display,
            base,
            kebab_case(target)
        )),
    }
}

/// Strip link syntax from references that resolve to nothing.
///
/// A span is stripped when its target, minus alias and `#heading`, is in
/// `uncited`; it is replaced by its display text.
pub fn filter_links(content: &str, uncited: &BTreeSet<String>) -> String {
    if uncited.is_empty() {
        return content.to_string();
    }

    scanner::rewrite(content, |link| {
        if link.is_citation() {
            return None;
        }
        let target = link.target();
        uncited
            .contains(strip_anchor(target))
            .then(|| link.alias().unwrap_or(target).to_string())
    })
}
