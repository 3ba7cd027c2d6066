//! Short inline and long end-of-note citation rendering.

use std::collections::HashMap;

use biblatex::Person;

use crate::bibtex::Bibliography;
use crate::entry::BibEntry;
use wikipress_core::{Document, Error, Result};
use wikipress_parser::kebab_case;
use wikipress_parser::scanner::{self, WikiLink};

/// Heading used for the references section when none is configured
pub const DEFAULT_HEADING: &str = "# References";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `Smith`, `Smith & Doe` or `Smith et al.`
pub fn format_authors(authors: &[Person]) -> String {
    match authors {
        [] => String::new(),
        [only] => only.name.clone(),
        [first, second] => format!("{} & {}", first.name, second.name),
        [first, ..] => format!("{} et al.", first.name),
    }
}

/// Year of an entry: the first segment of `date`, else `year`.
pub fn format_year(entry: &BibEntry) -> String {
    if let Some(date) = &entry.date {
        return date.split('-').next().unwrap_or_default().to_string();
    }
    match &entry.year {
        Some(year) => year.clone(),
        None => {
            log::warn!("Entry '{}' has no date or year", entry.key);
            String::new()
        }
    }
}

/// Like [`format_year`], prefixed by the capitalized month when the entry
/// has a `year` and a `month` but no `date`.
pub fn format_long_date(entry: &BibEntry) -> String {
    let year = format_year(entry);
    if entry.date.is_some() || year.is_empty() {
        return year;
    }
    match entry.month.as_deref().map(month_name) {
        Some(month) if !month.is_empty() => format!("{month} {year}"),
        _ => year,
    }
}

fn month_name(month: &str) -> String {
    if let Ok(n) = month.parse::<usize>() {
        if (1..=12).contains(&n) {
            return MONTH_NAMES[n - 1].to_string();
        }
    }
    let lower = month.to_lowercase();
    if let Some(name) = MONTH_NAMES
        .iter()
        .find(|name| lower.len() >= 3 && name.to_lowercase().starts_with(&lower))
    {
        return name.to_string();
    }
    let mut chars = month.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Inline short form: `(Smith & Doe 2020)`
pub fn short_citation(entry: &BibEntry) -> String {
    let names = format_authors(&entry.authors);
    let year = format_year(entry);
    if year.is_empty() {
        format!("({names})")
    } else {
        format!("({names} {year})")
    }
}

/// One numbered paragraph of the references section.
pub fn long_citation(entry: &BibEntry, number: usize) -> String {
    let title = match (&entry.title, &entry.url) {
        (Some(title), Some(url)) => format!("[“{title}”]({url})"),
        (Some(title), None) => format!("“{title}”"),
        (None, _) => {
            log::warn!("Entry '{}' has no title", entry.key);
            String::new()
        }
    };
    let parts = [
        format_authors(&entry.authors),
        title,
        entry.kind.detail(&entry.key),
        format_long_date(entry),
    ];
    let text = parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    format!("<p id=\"{}\">{number}. {text}</p>", entry.key)
}

/// Citation key of a `[[@key]]` or `[[@key|label]]` span
fn citation_key<'a>(link: &WikiLink<'a>) -> Option<&'a str> {
    if !link.is_citation() {
        return None;
    }
    Some(link.target()[1..].trim())
}

/// Renders the citations of one document against a bibliography
#[derive(Debug, Clone)]
pub struct CitationRenderer<'a> {
    bibliography: &'a Bibliography,
    heading: &'a str,
}

impl<'a> CitationRenderer<'a> {
    pub fn new(bibliography: &'a Bibliography, heading: &'a str) -> Self {
        Self {
            bibliography,
            heading,
        }
    }

    /// Rewrite every citation in the document body.
    ///
    /// Each `[[@key]]` becomes its short form, linked to the entry URL or,
    /// without one, to the entry's paragraph on this page. When at least one
    /// key is cited, a references section listing each key once, in
    /// first-seen order, is appended.
    ///
    /// Fails on the first key missing from the bibliography or the first
    /// cited entry without an author.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut order: Vec<&str> = Vec::new();
        let mut entries: HashMap<&str, BibEntry> = HashMap::new();

        for link in scanner::links(&doc.body) {
            let Some(key) = citation_key(&link) else {
                continue;
            };
            if entries.contains_key(key) {
                continue;
            }
            let found = self
                .bibliography
                .get(key)
                .ok_or_else(|| Error::citation_not_found(key, doc.source()))?;
            entries.insert(key, BibEntry::from_entry(found)?);
            order.push(key);
        }

        if order.is_empty() {
            return Ok(doc.body.clone());
        }

        let page = kebab_case(&doc.title());
        let mut body = scanner::rewrite(&doc.body, |link| {
            let entry = entries.get(citation_key(link)?)?;
            let short = short_citation(entry);
            Some(match &entry.url {
                Some(url) => format!("[{short}]({url})"),
                None => format!("[{short}]({page}#{})", entry.key),
            })
        });

        body.truncate(body.trim_end().len());
        body.push_str("\n\n");
        body.push_str(self.heading);
        body.push_str("\n\n");
        let section = order
            .iter()
            .enumerate()
            .filter_map(|(idx, key)| entries.get(key).map(|entry| long_citation(entry, idx + 1)))
            .collect::<Vec<_>>()
            .join("\n\n");
        body.push_str(&section);
        body.push('\n');
        Ok(body)
    }
}
