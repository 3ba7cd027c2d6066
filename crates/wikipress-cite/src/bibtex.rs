//! BibLaTeX / BibTeX files, read with the `biblatex` crate.
//!
//! The crate resolves `@string` macros, `#` concatenation and the predefined
//! month macros. Field values are read back as plain text with grouping
//! braces dropped and whitespace collapsed.

use biblatex::{ChunksExt, Entry};
use std::fs;
use std::path::Path;
use wikipress_core::{Error, Result};

/// Plain-text value of a field; empty values count as missing.
pub fn field(entry: &Entry, name: &str) -> Option<String> {
    entry
        .get(name)
        .map(|chunks| chunks.format_verbatim())
        .map(|value| value.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|value| !value.is_empty())
}

/// First of `names` that is present
pub fn first_field(entry: &Entry, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| field(entry, name))
}

/// A parsed bibliography, keyed by citation key
#[derive(Debug)]
pub struct Bibliography {
    entries: biblatex::Bibliography,
}

impl Default for Bibliography {
    fn default() -> Self {
        Self {
            entries: biblatex::Bibliography::new(),
        }
    }
}

impl Bibliography {
    /// Read and parse a bibliography file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }
        let source = fs::read_to_string(path)?;
        let bibliography = Self::parse_named(&source, &path.display().to_string())?;
        log::info!(
            "Loaded {} bibliography entries from {}",
            bibliography.len(),
            path.display()
        );
        Ok(bibliography)
    }

    /// Parse bibliography source text.
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_named(source, "bibliography")
    }

    fn parse_named(source: &str, origin: &str) -> Result<Self> {
        let entries = biblatex::Bibliography::parse(source).map_err(|e| {
            let offset = e.span.start.min(source.len());
            let line = source[..offset].matches('\n').count() + 1;
            Error::parse_error(format!("{origin}, line {line}: {e}"))
        })?;
        Ok(Self { entries })
    }

    /// Look up an entry by citation key
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry was read
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
