// ==============================================================================
// error.rs - Error Taxonomy
// ==============================================================================
// Description: Errors raised by the converter and phenotype filter
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Exit codes:
//   1 = I/O error (unreadable input, unwritable output)
//   2 = Malformed record (too few fields, not UTF-8, unparseable LOG10P)
//   3 = Column not found (phenotype or layout header name)
//   4 = Invalid column layout configuration
// ==============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing GWAS files
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line} is not valid UTF-8 text")]
    InvalidText { line: usize },

    #[error("Invalid LOG10P value at line {line}: '{value}'")]
    InvalidLog10P { line: usize, value: String },

    #[error("Column '{name}' not found in header")]
    ColumnNotFound { name: String },

    #[error("Invalid column layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid column layout file: {0}")]
    LayoutConfig(#[from] serde_json::Error),
}

impl PrepError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrepError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            PrepError::Io { .. } => 1,
            PrepError::Csv(e) if e.is_io_error() => 1,
            PrepError::Csv(_) => 2,
            PrepError::MalformedRecord { .. }
            | PrepError::InvalidText { .. }
            | PrepError::InvalidLog10P { .. } => 2,
            PrepError::ColumnNotFound { .. } => 3,
            PrepError::InvalidLayout(_) | PrepError::LayoutConfig(_) => 4,
        }
    }

    /// Exit code for an error chain; failures outside this crate count as I/O
    pub fn exit_code_of(err: &anyhow::Error) -> u8 {
        err.downcast_ref::<PrepError>()
            .map_or(1, PrepError::exit_code)
    }
}
