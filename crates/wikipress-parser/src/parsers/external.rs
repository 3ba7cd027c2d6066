//! Bare URL auto-linking and markdown-link to HTML anchor conversion.

use regex::Regex;
use std::sync::LazyLock;

static URL_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*?)\]\((.*?)\)").unwrap());

/// Characters that may continue a URL.
///
/// A match is rejected when the character right after it is one of these,
/// so a URL followed by `)` or mid-word is shortened until it ends in front
/// of something that cannot belong to it.
const URL_CONTINUATION_CHARS: &[char] = &[
    ')', '.', '/', '_', ',', '-', '=', '?', '&', '~', '#', '%', ':',
];

fn continues_url(c: char) -> bool {
    c.is_ascii_alphanumeric() || URL_CONTINUATION_CHARS.contains(&c)
}

fn ends_url_body(c: char) -> bool {
    c.is_whitespace() || matches!(c, ']' | '(' | ')' | '"' | '<' | '>')
}

/// Find the end of a bare URL whose body starts at `body_start`.
///
/// Returns `None` when no non-empty body can end in front of a
/// non-continuation character.
fn url_end(text: &str, body_start: usize) -> Option<usize> {
    let rest = &text[body_start..];
    let body_len = rest.find(ends_url_body).unwrap_or(rest.len());
    if body_len == 0 {
        return None;
    }

    let mut boundaries: Vec<usize> = rest[..body_len]
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .collect();

    while let Some(end) = boundaries.pop() {
        match rest[end..].chars().next() {
            Some(next) if continues_url(next) => continue,
            _ => return Some(body_start + end),
        }
    }
    None
}

/// Wrap bare `http://` and `https://` URLs as `[url](url)`.
///
/// URLs that are already the text of a markdown link (preceded by `[`), its
/// target (followed by `)`) or a quoted HTML attribute (preceded by `"`) are
/// left alone. A URL never extends past `"`, `<` or `>`.
///
/// # Examples
///
/// ```
/// use wikipress_parser::autolink_external;
///
/// assert_eq!(
///     autolink_external("https://google.com"),
///     "[https://google.com](https://google.com)"
/// );
/// assert_eq!(
///     autolink_external("[https://google.com](https://google.com)"),
///     "[https://google.com](https://google.com)"
/// );
/// ```
pub fn autolink_external(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(m) = URL_START.find_at(text, search) {
        let start = m.start();
        if start > 0 && matches!(text.as_bytes()[start - 1], b'[' | b'"') {
            search = m.end();
            continue;
        }
        match url_end(text, m.end()) {
            Some(end) => {
                let url = &text[start..end];
                out.push_str(&text[copied..start]);
                out.push('[');
                out.push_str(url);
                out.push_str("](");
                out.push_str(url);
                out.push(')');
                copied = end;
                search = end;
            }
            None => search = m.end(),
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Resolve `url` against `base` the way a browser resolves an `href`.
///
/// Absolute URLs and an empty base return `url` unchanged.
pub fn join_url(base: &str, url: &str) -> String {
    if base.is_empty() || url.contains("://") || url.starts_with("mailto:") {
        return url.to_string();
    }
    if url.is_empty() {
        return base.to_string();
    }

    let origin_end = base
        .find("://")
        .map(|scheme| {
            let host_start = scheme + 3;
            base[host_start..]
                .find('/')
                .map_or(base.len(), |idx| host_start + idx)
        })
        .unwrap_or(0);
    let without_fragment = base.split('#').next().unwrap_or(base);

    if url.starts_with('#') {
        format!("{without_fragment}{url}")
    } else if url.starts_with('/') {
        format!("{}{url}", &base[..origin_end])
    } else {
        let dir_end = without_fragment
            .rfind('/')
            .filter(|&idx| idx >= origin_end)
            .map_or(without_fragment.len(), |idx| idx + 1);
        let dir = &without_fragment[..dir_end];
        if dir.ends_with('/') {
            format!("{dir}{url}")
        } else {
            format!("{dir}/{url}")
        }
    }
}

/// Turn markdown links `[text](url)` into `<a href="...">text</a>`.
///
/// Relative URLs are resolved against `base`.
pub fn markdown_links_to_anchors(text: &str, base: &str) -> String {
    MARKDOWN_LINK
        .replace_all(text, |caps: &regex::Captures| {
            format!(r#"<a href="{}">{}</a>"#, join_url(base, &caps[2]), &caps[1])
        })
        .into_owned()
}
