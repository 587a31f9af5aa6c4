//! Error types for sjson parsing, encoding, and I/O.
//!
//! Only hard failures live here. Tree mutators and `FromJson` decoding report
//! mismatches through `bool` returns so callers can default per field.

use thiserror::Error;

/// Errors that can occur while reading or writing sjson documents.
#[derive(Error, Debug)]
pub enum Error {
    /// Structural parse error. Includes the 1-based line number where the
    /// error was detected.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Input nested deeper than `ParseOptions::max_depth`.
    #[error("parse error at line {line}: nesting deeper than {limit} levels")]
    NestingTooDeep { line: usize, limit: usize },

    /// An enumerator has no entry in its string table.
    #[error("cannot encode {variant} of {table}: no string mapping")]
    UnmappedEnumerator { table: &'static str, variant: String },

    /// Reading from a source or writing to a sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Strict JSON interop failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Line number for parse-class errors, `None` otherwise.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } | Error::NestingTooDeep { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True for errors raised by the parser (as opposed to encode or I/O).
    pub fn is_parse(&self) -> bool {
        self.line().is_some()
    }
}

/// Convenience alias used throughout sjson-core.
pub type Result<T> = std::result::Result<T, Error>;
