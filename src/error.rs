//! Error taxonomy and exit-code mapping.
//!
//! Typed variants rather than string messages so `main` can map each class
//! to its documented exit code and tests can match on the failure kind.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Canonical result for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The data file argument does not contain `.tsv` in its path.
    #[error("specify a .tsv data file as command-line argument, got {}", path.display())]
    NotTsv { path: PathBuf },

    /// The data file could not be opened or read.
    #[error("error reading data from {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A selected or filtered column index fell outside a visited row.
    #[error("column index {column} out of range on row {row} ({width} cells)")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },

    /// Failure writing to the output stream.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code for this error class.
    ///
    /// 1 for invalid invocations and fatal per-row failures, 2 for an
    /// unreadable data file.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotTsv { .. } => 1,
            Error::Unreadable { .. } => 2,
            Error::ColumnOutOfRange { .. } | Error::Io(_) => 1,
        }
    }
}
