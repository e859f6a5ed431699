//! Custom error and warning types for the xer-reader crate.

use std::fmt;
use thiserror::Error;

use super::fields::FieldKind;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum XerError {
    /// An error originating from I/O operations, surfaced unmodified.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field value could not be coerced to the kind its schema declares.
    ///
    /// This aborts the whole parse: every record in the graph is fully typed.
    #[error("Cannot decode {table}.{field} as {expected}: {value:?}")]
    Decode {
        table: &'static str,
        field: &'static str,
        value: String,
        expected: FieldKind,
    },

    /// The caller asked for a text encoding `encoding_rs` does not know.
    #[error("Unsupported text encoding: {0}")]
    UnsupportedEncoding(String),

    /// The input is structurally invalid.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A convenience `Result` type alias using the crate's `XerError` type.
pub type Result<T> = std::result::Result<T, XerError>;

/// A recoverable condition met while reading a file.
///
/// Warnings never stop the parse; they are logged and collected on the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A `%R` row arrived before any `%F` row for its table; the row was dropped.
    MissingHeader { table: String, line: usize },
    /// A `%T` block names a table with no schema; its rows were skipped.
    UnknownTable { table: String, line: usize },
    /// A `%R` row arrived before any `%T` row.
    RecordOutsideTable { line: usize },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::MissingHeader { table, line } => write!(
                f,
                "line {}: record in table '{}' precedes its field header, skipped",
                line, table
            ),
            ParseWarning::UnknownTable { table, line } => {
                write!(f, "line {}: unknown table '{}', block skipped", line, table)
            }
            ParseWarning::RecordOutsideTable { line } => {
                write!(f, "line {}: record before any table marker, skipped", line)
            }
        }
    }
}
