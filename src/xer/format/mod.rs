//! Wire format layer: rows in, rows out.
//!
//! # Module Organization
//!
//! - [`tokenizer`]: classifies `%T` / `%F` / `%R` / `%E` rows
//! - [`header`]: the opening `ERMHDR` row
//! - [`decode`]: pairs rows with headers and decodes fields by schema
//! - [`writer`]: emits a graph in table dependency order
//!
//! # Architecture
//!
//! ```text
//! text ──tokenizer──▶ RawRecord ──decode──▶ typed record ──▶ XerData
//!                                                              │
//! text ◀──────────────────── writer ◀── encode_field ◀─────────┘
//! ```

pub mod decode;
pub mod header;
pub mod tokenizer;
pub mod writer;
