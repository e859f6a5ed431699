//! Row classification for the XER wire format.
//!
//! # Row layout
//! ```text
//! ERMHDR  8.0  2021-11-02  Project  ...     ← optional export header
//! %T      TASK                              ← switch table, forget header
//! %F      task_id  proj_id  task_code  ...  ← field names (trimmed)
//! %R      1001     100      A1000      ...  ← values, paired positionally
//! %E                                        ← end of stream
//! ```
//!
//! Columns are tab separated with no quoting. Rows end in `\n` or `\r\n`.

use log::{trace, warn};

use super::decode::RawRecord;
use crate::xer::types::error::ParseWarning;

pub const TABLE_MARKER: &str = "%T";
pub const FIELDS_MARKER: &str = "%F";
pub const RECORD_MARKER: &str = "%R";
pub const END_MARKER: &str = "%E";
pub const EXPORT_HEADER_MARKER: &str = "ERMHDR";

/// One meaningful event produced while scanning the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// The `ERMHDR` row; values exclude the marker itself.
    ExportHeader { line: usize, values: Vec<&'a str> },
    /// A `%T` row opening a new table block.
    TableStart { line: usize, name: &'a str },
    /// A `%R` row paired with the current `%F` header.
    Record(RawRecord<'a>),
    /// A recoverable problem; the offending row was dropped.
    Warning(ParseWarning),
    /// The `%E` row. Nothing after it is read.
    End { line: usize },
}

/// Streaming tokenizer over the decoded text of an XER file.
///
/// Tracks the current table and its field header. A `%T` row forgets the
/// previous header so that every table must bring its own `%F` row.
pub struct Tokenizer<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
    table: Option<&'a str>,
    header: Option<Vec<&'a str>>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').enumerate(),
            table: None,
            header: None,
            finished: false,
        }
    }

    fn classify(&mut self, line: usize, row: &'a str) -> Option<Token<'a>> {
        let mut columns = row.split('\t');
        let marker = columns.next()?.trim();
        match marker {
            TABLE_MARKER => {
                let name = columns.next().unwrap_or_default().trim();
                trace!("line {}: table {}", line, name);
                self.table = Some(name);
                self.header = None;
                Some(Token::TableStart { line, name })
            }
            FIELDS_MARKER => {
                self.header = Some(columns.map(str::trim).collect());
                None
            }
            RECORD_MARKER => {
                let warning = match (self.table, &self.header) {
                    (Some(table), Some(header)) => {
                        let values: Vec<&'a str> = columns.collect();
                        return Some(Token::Record(RawRecord::new(table, line, header, &values)));
                    }
                    (Some(table), None) => ParseWarning::MissingHeader {
                        table: table.to_string(),
                        line,
                    },
                    (None, _) => ParseWarning::RecordOutsideTable { line },
                };
                warn!("{}", warning);
                Some(Token::Warning(warning))
            }
            END_MARKER => {
                self.finished = true;
                Some(Token::End { line })
            }
            EXPORT_HEADER_MARKER => Some(Token::ExportHeader {
                line,
                values: columns.collect(),
            }),
            "" => None,
            other => {
                trace!("line {}: unrecognised row marker {:?} skipped", line, other);
                None
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let (index, row) = self.lines.next()?;
            let row = row.strip_suffix('\r').unwrap_or(row);
            if row.trim().is_empty() {
                continue;
            }
            if let Some(token) = self.classify(index + 1, row) {
                return Some(token);
            }
        }
        None
    }
}

/// Splits the text into tokens. See [`Tokenizer`].
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}
