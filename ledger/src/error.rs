//! Ledger error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Ledger errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing events file does not exist.
    #[error("events file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// IO error while reading or rewriting the events file.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The events file could not be parsed or written as comma-separated text.
    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row does not carry exactly seven fields.
    #[error("malformed row at line {line} of {}: expected 7 fields, found {fields}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    /// The category label is not in the registry.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl LedgerError {
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn malformed_row(path: impl AsRef<Path>, line: u64, fields: usize) -> Self {
        Self::MalformedRow {
            path: path.as_ref().to_path_buf(),
            line,
            fields,
        }
    }

    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory(label.into())
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
