//! Codec layer for the encodings nested inside field values.
//!
//! # Submodules
//!
//! - [`calendar`][]: the calendar work-pattern and exception notation

pub mod calendar;
