//! Core XER reader module.
//!
//! # Layers
//!
//! - [`types`]: errors, field codecs, the record trait and the table catalogue
//! - [`format`]: tokenizer, export header, record decoding, writer
//! - [`codec`]: decoders for encodings nested inside fields
//! - [`store`] / [`graph`]: per-table storage and the root context
//! - [`iter`]: navigable views over the graph
//! - [`reader`]: the entry point tying it together

pub mod codec;
pub mod format;
pub mod graph;
pub mod iter;
pub mod reader;
pub mod store;
pub mod types;
pub mod utils;

pub use graph::XerData;
pub use iter::{Node, Rows};
pub use reader::XerReader;
pub use types::error::{ParseWarning, Result, XerError};
