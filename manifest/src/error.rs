//! Error kinds reported by the manifest library.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn `manifest.csv` into test records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The manifest file is missing or unreadable.
    #[error("cannot read manifest {path}: {source}")]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The CSV input is malformed.
    #[error("malformed CSV at record {record}: {source}")]
    Csv {
        /// Zero-based data record index.
        record: usize,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// The input has no header row.
    #[error("manifest has no header row")]
    MissingHeader,
    /// The header row lacks a required column.
    #[error("manifest header is missing required column `{0}`")]
    MissingColumn(&'static str),
    /// A row has no `test` identifier.
    #[error("row {row} has no `test` identifier")]
    MissingId {
        /// One-based data row number.
        row: usize,
    },
    /// A row has no `name`.
    #[error("test `{id}` has no `name`")]
    MissingName {
        /// Identifier of the offending test.
        id: String,
    },
    /// Two rows share an identifier.
    #[error("duplicate test identifier `{0}`")]
    DuplicateId(String),
}

/// An unrecognized `--format` value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown format {0:?} (expected one of: jsonld, ttl, html)")]
pub struct FormatError(pub String);
