//! Math delimiter normalization.
//!
//! Text is split into `$$...$$` blocks, `$...$` inline spans and literal
//! runs before anything is rewritten, so content already inside `$$` is
//! never promoted again.

/// One piece of math-scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MathSegment<'a> {
    Text(&'a str),
    /// Content between `$$` delimiters; `end` is the byte offset after the closing `$$`
    Block { content: &'a str, end: usize },
    /// Content between single `$` delimiters
    Inline(&'a str),
}

fn scan_math(text: &str) -> Vec<MathSegment<'_>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'$') {
            match text[i + 2..].find("$$") {
                Some(rel) => {
                    let close = i + 2 + rel;
                    if i > text_start {
                        segments.push(MathSegment::Text(&text[text_start..i]));
                    }
                    segments.push(MathSegment::Block {
                        content: &text[i + 2..close],
                        end: close + 2,
                    });
                    i = close + 2;
                    text_start = i;
                }
                None => i += 2,
            }
            continue;
        }

        // A lone `$` only opens inline math when not touching another `$`.
        if i > 0 && bytes[i - 1] == b'$' {
            i += 1;
            continue;
        }
        match text[i + 1..].find('$') {
            Some(rel) if rel > 0 && bytes.get(i + 1 + rel + 1) != Some(&b'$') => {
                let close = i + 1 + rel;
                if i > text_start {
                    segments.push(MathSegment::Text(&text[text_start..i]));
                }
                segments.push(MathSegment::Inline(&text[i + 1..close]));
                i = close + 1;
                text_start = i;
            }
            _ => i += 1,
        }
    }

    if text_start < text.len() {
        segments.push(MathSegment::Text(&text[text_start..]));
    }
    segments
}

fn is_multiline_block(content: &str) -> bool {
    content.len() >= 3 && content.starts_with('\n') && content.ends_with('\n')
}

/// Normalize math delimiters.
///
/// - `$x$` becomes `$$x$$`.
/// - A multi-line `$$\n...\n$$` block gets a line break inserted before and
///   after it when one is missing. Only a single `\n` is added, so a block
///   that already sits on its own lines is left as is; a blank line is not
///   forced.
///
/// Text without `$` is returned unchanged, and the function is idempotent.
///
/// # Examples
///
/// ```
/// use wikipress_parser::normalize_math;
///
/// assert_eq!(normalize_math("$x$"), "$$x$$");
/// assert_eq!(normalize_math("$$\nx\n$$"), "\n$$\nx\n$$\n");
/// ```
pub fn normalize_math(text: &str) -> String {
    if !text.contains('$') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 16);
    for segment in scan_math(text) {
        match segment {
            MathSegment::Text(t) => out.push_str(t),
            MathSegment::Inline(content) => {
                out.push_str("$$");
                out.push_str(content);
                out.push_str("$$");
            }
            MathSegment::Block { content, end } => {
                let spaced = is_multiline_block(content);
                if spaced && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("$$");
                out.push_str(content);
                out.push_str("$$");
                if spaced && !text[end..].starts_with('\n') {
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Escape `$$` block content for KaTeX rendering through a markdown engine.
///
/// Inside each block, `_{` not preceded by a backslash becomes `\_{` and a
/// standalone `\\` becomes `\\\`. Each pass rewrites the first remaining
/// occurrence per block; passes repeat until the text stops changing.
pub fn escape_katex(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = escape_katex_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn escape_katex_pass(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for segment in scan_math(text) {
        match segment {
            MathSegment::Text(t) => out.push_str(t),
            MathSegment::Inline(content) => {
                out.push('$');
                out.push_str(content);
                out.push('$');
            }
            MathSegment::Block { content, .. } => {
                let content = escape_first_subscript(content);
                let content = escape_first_line_break(&content);
                out.push_str("$$");
                out.push_str(&content);
                out.push_str("$$");
            }
        }
    }
    out
}

fn escape_first_subscript(content: &str) -> String {
    let bytes = content.as_bytes();
    let found = content
        .match_indices("_{")
        .map(|(idx, _)| idx)
        .find(|&idx| idx == 0 || bytes[idx - 1] != b'\\');

    match found {
        Some(idx) => format!("{}\\{}", &content[..idx], &content[idx..]),
        None => content.to_string(),
    }
}

fn escape_first_line_break(content: &str) -> String {
    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i] == b'\\' {
            i += 1;
        }
        if i - run_start == 2 {
            return format!("{}\\{}", &content[..i], &content[i..]);
        }
    }
    content.to_string()
}
