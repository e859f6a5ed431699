//! Foundational data structures: errors, field codecs, the record trait and
//! the table catalogue.

pub mod error;
pub mod fields;
pub mod schema;
pub mod tables;
