//! Typed view of a bibliography entry.
//!
//! Each entry type carries only the fields its detail line uses, so the
//! detail formatting is written once per variant.

use biblatex::{Entry, EntryType, Person};

use crate::bibtex::{field, first_field};
use wikipress_core::{Error, Result};

/// Type-specific fields of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Article {
        journal: Option<String>,
        volume: Option<String>,
        number: Option<String>,
        pages: Option<String>,
    },
    Book {
        publisher: Option<String>,
    },
    InProceedings {
        publisher: Option<String>,
        booktitle: Option<String>,
        eventtitle: Option<String>,
    },
    Online {
        eprinttype: Option<String>,
        eprint: Option<String>,
        doi: Option<String>,
    },
    Misc {
        eprinttype: Option<String>,
        eprint: Option<String>,
    },
    /// Any other entry type, named as written
    Unknown(String),
}

impl EntryKind {
    /// Build the typed view from an entry's type and fields
    pub fn from_entry(entry: &Entry) -> Self {
        match &entry.entry_type {
            EntryType::Article => EntryKind::Article {
                journal: first_field(entry, &["journaltitle", "journal"]),
                volume: field(entry, "volume"),
                number: field(entry, "number"),
                pages: field(entry, "pages"),
            },
            EntryType::Book => EntryKind::Book {
                publisher: field(entry, "publisher"),
            },
            EntryType::InProceedings => EntryKind::InProceedings {
                publisher: field(entry, "publisher"),
                booktitle: field(entry, "booktitle"),
                eventtitle: field(entry, "eventtitle"),
            },
            EntryType::Online => EntryKind::Online {
                eprinttype: first_field(entry, &["eprinttype", "archiveprefix"]),
                eprint: field(entry, "eprint"),
                doi: field(entry, "doi"),
            },
            EntryType::Misc => EntryKind::Misc {
                eprinttype: first_field(entry, &["eprinttype", "archiveprefix"]),
                eprint: field(entry, "eprint"),
            },
            other => EntryKind::Unknown(other.to_string()),
        }
    }

    /// Type-specific detail shown between the title and the year.
    ///
    /// Missing pieces degrade to an empty string with a warning.
    pub fn detail(&self, key: &str) -> String {
        match self {
            EntryKind::Article {
                journal,
                volume,
                number,
                pages,
            } => {
                let Some(journal) = journal else {
                    log::warn!("Article '{key}' has no journal; leaving detail empty");
                    return String::new();
                };
                let mut detail = journal.clone();
                match (volume, number) {
                    (Some(v), Some(n)) => detail.push_str(&format!(" {v}/{n}")),
                    (Some(v), None) => detail.push_str(&format!(" {v}")),
                    (None, Some(n)) => detail.push_str(&format!(" {n}")),
                    (None, None) => {}
                }
                if let Some(pages) = pages {
                    detail.push_str(&format!(", {pages}"));
                }
                detail
            }
            EntryKind::Book { publisher } => publisher.clone().unwrap_or_else(|| {
                log::warn!("Book '{key}' has no publisher");
                String::new()
            }),
            EntryKind::InProceedings {
                publisher,
                booktitle,
                eventtitle,
            } => publisher
                .as_ref()
                .or(booktitle.as_ref())
                .or(eventtitle.as_ref())
                .cloned()
                .unwrap_or_else(|| {
                    log::warn!("Proceedings entry '{key}' has no publisher, booktitle or eventtitle");
                    String::new()
                }),
            EntryKind::Online {
                eprinttype,
                eprint,
                doi,
            } => match eprinttype.as_deref().map(str::to_lowercase).as_deref() {
                Some("arxiv") => arxiv_detail(key, eprint.as_deref()),
                Some("doi") => match doi.as_deref().or(eprint.as_deref()) {
                    Some(id) => format!("DOI: {id}"),
                    None => {
                        log::warn!("Online entry '{key}' has eprinttype doi but no identifier");
                        String::new()
                    }
                },
                Some(other) => {
                    log::warn!("Online entry '{key}' has unknown eprinttype '{other}'");
                    String::new()
                }
                None => {
                    log::warn!("Online entry '{key}' has no eprinttype");
                    String::new()
                }
            },
            EntryKind::Misc { eprinttype, eprint } => {
                match eprinttype.as_deref().map(str::to_lowercase).as_deref() {
                    Some("arxiv") | None if eprint.is_some() => arxiv_detail(key, eprint.as_deref()),
                    Some(other) if other != "arxiv" => {
                        log::warn!("Misc entry '{key}' has unsupported eprinttype '{other}'");
                        String::new()
                    }
                    _ => {
                        log::warn!("Misc entry '{key}' has no eprint; leaving detail empty");
                        String::new()
                    }
                }
            }
            EntryKind::Unknown(entry_type) => {
                log::warn!("Entry '{key}' has unknown type '{entry_type}'");
                String::new()
            }
        }
    }
}

fn arxiv_detail(key: &str, eprint: Option<&str>) -> String {
    match eprint {
        Some(id) => format!("arXiv preprint arXiv:{id}"),
        None => {
            log::warn!("Entry '{key}' is an arXiv preprint without an eprint id");
            String::new()
        }
    }
}

/// A bibliography entry ready for rendering
#[derive(Debug, Clone)]
pub struct BibEntry {
    pub key: String,
    pub authors: Vec<Person>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub kind: EntryKind,
}

impl BibEntry {
    /// Build a renderable entry.
    ///
    /// A missing or empty `author` field is an error: every short citation
    /// needs it.
    pub fn from_entry(entry: &Entry) -> Result<Self> {
        let authors = entry
            .author()
            .ok()
            .filter(|authors| !authors.is_empty())
            .ok_or_else(|| Error::missing_field(&entry.key, "author"))?;

        Ok(Self {
            key: entry.key.clone(),
            authors,
            title: field(entry, "title"),
            url: field(entry, "url"),
            date: field(entry, "date"),
            year: field(entry, "year"),
            month: field(entry, "month"),
            kind: EntryKind::from_entry(entry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibtex::Bibliography;

    fn entry(source: &str, key: &str) -> BibEntry {
        let bib = Bibliography::parse(source).unwrap();
        BibEntry::from_entry(bib.get(key).unwrap()).unwrap()
    }

    #[test]
    fn test_article_detail() {
        let e = entry(
            "@article{a, author={X}, journaltitle={Nature}, volume=5, number=2, pages={17}}",
            "a",
        );
        assert_eq!(e.kind.detail("a"), "Nature 5/2, 17");

        let e = entry("@article{b, author={X}, journal={Science}}", "b");
        assert_eq!(e.kind.detail("b"), "Science");

        let e = entry("@article{c, author={X}, volume=5}", "c");
        assert_eq!(e.kind.detail("c"), "");
    }

    #[test]
    fn test_book_and_proceedings_detail() {
        let e = entry("@book{b, author={X}, publisher={MIT Press}}", "b");
        assert_eq!(e.kind.detail("b"), "MIT Press");

        let e = entry("@inproceedings{p, author={X}, booktitle={NeurIPS}}", "p");
        assert_eq!(e.kind.detail("p"), "NeurIPS");

        let e = entry("@inproceedings{q, author={X}, eventtitle={ICML}}", "q");
        assert_eq!(e.kind.detail("q"), "ICML");
    }

    #[test]
    fn test_online_detail() {
        let e = entry(
            "@online{o, author={X}, eprinttype={arxiv}, eprint={1706.03762}}",
            "o",
        );
        assert_eq!(e.kind.detail("o"), "arXiv preprint arXiv:1706.03762");

        let e = entry("@online{d, author={X}, eprinttype={doi}, doi={10.1/abc}}", "d");
        assert_eq!(e.kind.detail("d"), "DOI: 10.1/abc");

        let e = entry("@online{n, author={X}}", "n");
        assert_eq!(e.kind.detail("n"), "");

        let e = entry("@online{u, author={X}, eprinttype={hal}}", "u");
        assert_eq!(e.kind.detail("u"), "");
    }

    #[test]
    fn test_misc_arxiv_fallback() {
        let e = entry("@misc{m, author={X}, eprint={2101.00001}}", "m");
        assert_eq!(e.kind.detail("m"), "arXiv preprint arXiv:2101.00001");

        let e = entry("@misc{n, author={X}, howpublished={Blog}}", "n");
        assert_eq!(e.kind.detail("n"), "");

        let e = entry("@misc{h, author={X}, eprinttype={hal}, eprint={hal-001}}", "h");
        assert_eq!(e.kind.detail("h"), "");
    }

    #[test]
    fn test_unknown_type() {
        let e = entry("@thesis{t, author={X}}", "t");
        assert_eq!(e.kind, EntryKind::Unknown("thesis".into()));
        assert_eq!(e.kind.detail("t"), "");
    }

    #[test]
    fn test_authors_are_structured() {
        let e = entry("@article{c, author={de Coulomb, Charles-Augustin and Ampère, André-Marie}}", "c");
        assert_eq!(e.authors.len(), 2);
        assert_eq!(e.authors[0].name, "Coulomb");
        assert_eq!(e.authors[0].prefix, "de");
        assert_eq!(e.authors[1].given_name, "André-Marie");
    }

    #[test]
    fn test_missing_author_is_error() {
        let bib = Bibliography::parse("@book{b, title={No Author}}").unwrap();
        let err = BibEntry::from_entry(bib.get("b").unwrap()).unwrap_err();
        assert!(matches!(err, Error::MissingCitationField { .. }));
    }
}
