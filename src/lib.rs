//! # xer-reader
//!
//! A reader and writer for Primavera P6 XER project exchange files.
//!
//! Parses the tab-separated `%T` / `%F` / `%R` / `%E` format into a typed,
//! navigable graph of 29 tables, decodes the calendar work-pattern notation,
//! and writes the graph back out losslessly.
pub mod xer;

// Re-export the main types for convenience
pub use xer::{
    codec::calendar::{CalendarData, DayPattern, WorkInterval},
    format::header::ExportHeader,
    iter::{Constraint, ResourceTree},
    store::RecordStore,
    types::{
        fields::{FieldKind, Flag},
        schema::{FieldDef, Record},
        tables::*,
    },
    Node, ParseWarning, Result, Rows, XerData, XerError, XerReader,
};
