//! Reference classification.
//!
//! Every raw `[[...]]` reference of a note is sorted into images, citations,
//! references that resolve to a discovered note, and references that
//! resolve to nothing. The last group is what link conversion strips back
//! to plain text.

use std::collections::BTreeSet;
use std::path::PathBuf;

use wikipress_parser::{TargetKind, classify_target, split_alias, strip_anchor};

/// Per-note partition of references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Image targets, alias removed
    pub images: BTreeSet<String>,
    /// Targets found in the corpus, alias and anchor removed
    pub cited: BTreeSet<String>,
    /// Targets found nowhere, alias and anchor removed
    pub uncited: BTreeSet<String>,
    /// Citation keys, without the leading `@`
    pub citations: BTreeSet<String>,
}

/// Classifies references against the set of discovered note paths
#[derive(Debug, Clone)]
pub struct ReferenceClassifier {
    corpus: Vec<String>,
}

impl ReferenceClassifier {
    /// Build from the discovered note files.
    pub fn new(notes: &[PathBuf]) -> Self {
        Self {
            corpus: notes
                .iter()
                .map(|path| path.to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// True when any corpus path contains `reference` as a substring.
    ///
    /// Substring matching is permissive: `a` is found in `notes/banana.md`.
    pub fn resolves(&self, reference: &str) -> bool {
        self.corpus.iter().any(|path| path.contains(reference))
    }

    /// Partition a note's raw references.
    pub fn classify(&self, references: &[String]) -> Classification {
        let mut result = Classification::default();

        for reference in references {
            let (target, _) = split_alias(reference);
            match classify_target(target) {
                TargetKind::Citation => {
                    result.citations.insert(target[1..].trim().to_string());
                }
                TargetKind::Image => {
                    result.images.insert(target.to_string());
                }
                TargetKind::Anchor => {}
                TargetKind::Note => {
                    let name = strip_anchor(target);
                    if self.resolves(name) {
                        result.cited.insert(name.to_string());
                    } else {
                        log::debug!("Reference '{name}' resolves to no note");
                        result.uncited.insert(name.to_string());
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(paths: &[&str]) -> ReferenceClassifier {
        let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        ReferenceClassifier::new(&paths)
    }

    fn refs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_uncited_reference() {
        let c = classifier(&["notes/a.md", "notes/b.md"]);
        let result = c.classify(&refs(&["a", "c"]));
        assert_eq!(result.uncited, BTreeSet::from(["c".to_string()]));
        assert_eq!(result.cited, BTreeSet::from(["a".to_string()]));
        assert!(result.images.is_empty());
    }

    #[test]
    fn test_alias_anchor_image_and_citation() {
        let c = classifier(&["notes/Legge di Coulomb.md"]);
        let result = c.classify(&refs(&[
            "Legge di Coulomb#Principio|principio",
            "fig.png|300",
            "@knuth84|p. 3",
            "#Intro",
            "Ghost|boo",
        ]));
        assert_eq!(result.cited, BTreeSet::from(["Legge di Coulomb".to_string()]));
        assert_eq!(result.images, BTreeSet::from(["fig.png".to_string()]));
        assert_eq!(result.citations, BTreeSet::from(["knuth84".to_string()]));
        assert_eq!(result.uncited, BTreeSet::from(["Ghost".to_string()]));
    }

    #[test]
    fn test_substring_matching_is_permissive() {
        // Known behavior: `an` resolves because `notes/banana.md` contains it.
        let c = classifier(&["notes/banana.md"]);
        assert!(c.resolves("an"));
        assert!(c.classify(&refs(&["an"])).uncited.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let c = classifier(&[]);
        assert_eq!(c.classify(&[]), Classification::default());
        assert_eq!(
            c.classify(&refs(&["x"])).uncited,
            BTreeSet::from(["x".to_string()])
        );
    }
}
