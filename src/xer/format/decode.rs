//! Generic schema-driven record decoding and field encoding.
//!
//! One routine serves every table: the tokenizer hands over a [`RawRecord`]
//! (field name to raw text), and each generated [`Record::decode`] pulls its
//! columns out of it by name through [`RawRecord::decode`]. Encoding is the
//! mirror image, column by column through [`encode_field`].
//!
//! [`Record::decode`]: crate::xer::types::schema::Record::decode

use std::collections::HashMap;

use log::trace;

use crate::xer::types::error::{Result, XerError};
use crate::xer::types::fields::{FieldCodec, FieldKind};
use crate::xer::types::tables::Table;

/// One `%R` row paired with the active `%F` header.
///
/// Values borrow from the input text; nothing is copied until a field is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// The `%T` name the row was read under.
    pub table: &'a str,
    /// One-based line number of the `%R` row.
    pub line: usize,
    values: HashMap<&'a str, &'a str>,
}

impl<'a> RawRecord<'a> {
    /// Pairs header names with row values positionally.
    ///
    /// Extra values beyond the header are ignored; missing trailing values
    /// leave their fields absent.
    pub fn new(table: &'a str, line: usize, header: &[&'a str], values: &[&'a str]) -> Self {
        if values.len() > header.len() {
            trace!(
                "{} line {}: {} trailing values ignored",
                table,
                line,
                values.len() - header.len()
            );
        }
        let values = header
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect();
        Self { table, line, values }
    }

    /// The raw text of a field, `None` when the column is missing from the row.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.values.get(field).copied()
    }

    /// Decodes one field into its declared type.
    ///
    /// Empty or missing values are absent. Numeric and timestamp columns also
    /// treat whitespace-only values as absent; text and flags are verbatim.
    pub fn decode<T: FieldCodec>(&self, table: Table, field: &'static str) -> Result<Option<T>> {
        let raw = match self.get(field) {
            Some(raw) if !is_absent(raw, T::KIND) => raw,
            _ => return Ok(None),
        };
        T::decode(raw).map(Some).ok_or_else(|| XerError::Decode {
            table: table.name(),
            field,
            value: raw.to_string(),
            expected: T::KIND,
        })
    }
}

fn is_absent(raw: &str, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Text | FieldKind::Flag => raw.is_empty(),
        FieldKind::Int | FieldKind::Float | FieldKind::Timestamp => raw.trim().is_empty(),
    }
}

/// Encodes one optional column. Absent values become the empty string.
pub fn encode_field<T: FieldCodec>(value: &Option<T>) -> String {
    value.as_ref().map(FieldCodec::encode).unwrap_or_default()
}
