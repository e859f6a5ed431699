//! Serialises a graph back to the wire format.
//!
//! # Output layout
//! ```text
//! ERMHDR ...            ← export header
//! %T  CURRTYPE          ┐
//! %F  curr_id ...       │ one block per non-empty table,
//! %R  1 ...             │ in Table::ALL order
//! ...                   ┘
//! %E                    ← terminator
//! ```
//!
//! Rows end in `\n`. Absent values are written as empty columns.

use std::borrow::Cow;
use std::io::Write;

use log::{debug, info, warn};

use super::header::ExportHeader;
use super::tokenizer::{END_MARKER, FIELDS_MARKER, RECORD_MARKER, TABLE_MARKER};
use crate::xer::graph::XerData;
use crate::xer::types::error::Result;
use crate::xer::types::tables::Table;

/// Writes `data` to `out`, preceded by `header`.
pub fn write<W: Write>(data: &XerData, header: &ExportHeader, mut out: W) -> Result<()> {
    writeln!(out, "{}", header.to_row())?;
    let mut tables = 0;
    for table in data.populated_tables() {
        write_table(data, table, &mut out)?;
        tables += 1;
    }
    writeln!(out, "{}", END_MARKER)?;
    out.flush()?;
    info!("Wrote {} tables, {} records", tables, data.total_records());
    Ok(())
}

/// Renders the whole file into a string.
pub fn to_string(data: &XerData, header: &ExportHeader) -> Result<String> {
    let mut buffer = Vec::new();
    write(data, header, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_table<W: Write>(data: &XerData, table: Table, out: &mut W) -> Result<()> {
    let rows = data.encoded_rows(table);
    debug!("Writing {}: {} records", table, rows.len());

    writeln!(out, "{}\t{}", TABLE_MARKER, table.name())?;
    let names: Vec<&str> = table.fields().iter().map(|field| field.name).collect();
    writeln!(out, "{}\t{}", FIELDS_MARKER, names.join("\t"))?;

    for row in rows {
        write!(out, "{}", RECORD_MARKER)?;
        for (value, field) in row.iter().zip(names.iter()) {
            write!(out, "\t{}", sanitize(table, field, value))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// The format has no escaping, so column and row separators inside a value
/// are replaced by spaces.
fn sanitize<'v>(table: Table, field: &str, value: &'v str) -> Cow<'v, str> {
    if value.contains(['\t', '\r', '\n']) {
        warn!("{}.{}: separator characters in value replaced by spaces", table, field);
        Cow::Owned(value.replace(['\t', '\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
