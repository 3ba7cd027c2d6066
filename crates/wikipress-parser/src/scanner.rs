//! Bracket tokenizer - single source of truth for finding `[[...]]` spans.
//!
//! Scanning and rendering are separate steps: [`scan`] splits text into
//! literal runs and wiki-link spans, and [`rewrite`] hands each span to a
//! renderer that decides its replacement. All link, embed, citation and
//! dangling-reference rewrites go through here.
//!
//! A span opens at `[[` (or `![[` for embeds) and closes at the first `]]`
//! after it. The inner text must be non-empty and stay on one line;
//! otherwise the `[[` is literal text.

use crate::parsers::link_utils::split_alias;

/// A `[[inner]]` or `![[inner]]` occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikiLink<'a> {
    /// Preceded by `!`
    pub embed: bool,
    /// Text between the brackets
    pub inner: &'a str,
    /// Full source text of the span, including `!` and brackets
    pub raw: &'a str,
}

impl<'a> WikiLink<'a> {
    /// Target before any `|alias`
    pub fn target(&self) -> &'a str {
        split_alias(self.inner).0
    }

    /// Alias or size/caption suffix after the first `|`
    pub fn alias(&self) -> Option<&'a str> {
        split_alias(self.inner).1
    }

    /// `[[@key]]` citation marker
    pub fn is_citation(&self) -> bool {
        !self.embed && self.inner.starts_with('@')
    }
}

/// One piece of scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(WikiLink<'a>),
}

/// Split `text` into literal runs and wiki-link spans, in order.
pub fn scan(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    if !text.contains("[[") {
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }
        return segments;
    }

    let bytes = text.as_bytes();
    let mut text_start = 0;
    let mut search = 0;

    while let Some(rel) = text[search..].find("[[") {
        let open = search + rel;
        let inner_start = open + 2;

        let Some(len) = text[inner_start..].find("]]") else {
            break;
        };
        let inner = &text[inner_start..inner_start + len];
        if inner.is_empty() || inner.contains('\n') {
            search = open + 1;
            continue;
        }

        let close = inner_start + len + 2;
        let embed = open > text_start && bytes[open - 1] == b'!';
        let start = if embed { open - 1 } else { open };

        if start > text_start {
            segments.push(Segment::Text(&text[text_start..start]));
        }
        segments.push(Segment::Link(WikiLink {
            embed,
            inner,
            raw: &text[start..close],
        }));

        text_start = close;
        search = close;
    }

    if text_start < text.len() {
        segments.push(Segment::Text(&text[text_start..]));
    }
    segments
}

/// Re-render `text`, replacing every span the renderer returns `Some` for.
///
/// Spans the renderer declines are copied through unchanged.
pub fn rewrite<F>(text: &str, mut render: F) -> String
where
    F: FnMut(&WikiLink<'_>) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    for segment in scan(text) {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Link(link) => match render(&link) {
                Some(replacement) => out.push_str(&replacement),
                None => out.push_str(link.raw),
            },
        }
    }
    out
}

/// Every wiki-link inner text in source order, duplicates included.
pub fn links(text: &str) -> impl Iterator<Item = WikiLink<'_>> {
    scan(text).into_iter().filter_map(|segment| match segment {
        Segment::Link(link) => Some(link),
        Segment::Text(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_single_segment() {
        assert_eq!(scan("no links"), vec![Segment::Text("no links")]);
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_link_and_embed() {
        let segments = scan("see [[Note|alias]] and ![[img.png|300]].");
        assert_eq!(segments.len(), 5);
        match segments[1] {
            Segment::Link(link) => {
                assert!(!link.embed);
                assert_eq!(link.target(), "Note");
                assert_eq!(link.alias(), Some("alias"));
                assert_eq!(link.raw, "[[Note|alias]]");
            }
            _ => panic!("expected link"),
        }
        match segments[3] {
            Segment::Link(link) => {
                assert!(link.embed);
                assert_eq!(link.inner, "img.png|300");
                assert_eq!(link.raw, "![[img.png|300]]");
            }
            _ => panic!("expected embed"),
        }
        assert_eq!(segments[4], Segment::Text("."));
    }

    #[test]
    fn test_unclosed_and_multiline_are_literal() {
        assert_eq!(scan("a [[b"), vec![Segment::Text("a [[b")]);
        let segments = scan("[[a\nb]] [[c]]");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::Text("[[a\nb]] "));
    }

    #[test]
    fn test_empty_brackets_are_literal() {
        assert_eq!(links("[[]]").count(), 0);
    }

    #[test]
    fn test_adjacent_links() {
        let found: Vec<_> = links("[[a]][[b]]![[c.png]]").map(|l| l.inner).collect();
        assert_eq!(found, vec!["a", "b", "c.png"]);
    }

    #[test]
    fn test_citation_marker() {
        let link = links("[[@knuth84|p. 3]]").next().unwrap();
        assert!(link.is_citation());
        assert!(!links("![[@x]]").next().unwrap().is_citation());
    }

    #[test]
    fn test_rewrite_keeps_declined_spans() {
        let out = rewrite("[[keep]] [[drop]]", |link| {
            (link.inner == "drop").then(|| "gone".to_string())
        });
        assert_eq!(out, "[[keep]] gone");
    }
}
