//! Error types for the conversion system.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! Every variant is fatal for the run: non-fatal conditions are logged as
//! diagnostics and never surface as an `Error`.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all conversion operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Pipeline names an operation the registry does not know
    #[error("Configuration error: unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Operation options do not match what the operation accepts
    #[error("Configuration error: invalid options for '{operation}': {reason}")]
    InvalidOptions { operation: String, reason: String },

    /// Parse error
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    /// A `[[@key]]` citation has no bibliography entry
    #[error("Citation key '{key}' not found in bibliography (cited in {source_file})")]
    CitationKeyNotFound { key: String, source_file: PathBuf },

    /// A bibliography entry lacks a field the inline citation cannot do without
    #[error("Bibliography entry '{key}' has no '{field}' field")]
    MissingCitationField { key: String, field: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Error::UnknownOperation { name: name.into() }
    }

    /// Create an invalid options error for the named operation
    pub fn invalid_options(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidOptions {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Error::ParseError {
            reason: reason.into(),
        }
    }

    /// Create a citation resolution error
    pub fn citation_not_found(key: impl Into<String>, source_file: impl Into<PathBuf>) -> Self {
        Error::CitationKeyNotFound {
            key: key.into(),
            source_file: source_file.into(),
        }
    }

    /// Create a missing bibliography field error
    pub fn missing_field(key: impl Into<String>, field: impl Into<String>) -> Self {
        Error::MissingCitationField {
            key: key.into(),
            field: field.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// True for errors caused by the configuration file rather than content.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::ConfigError { .. } | Error::UnknownOperation { .. } | Error::InvalidOptions { .. }
        )
    }
}
