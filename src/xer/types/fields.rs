//! Field kinds and the per-kind text codecs.
//!
//! Every column of every table is declared with one of five kinds. The Rust
//! type chosen for a column implements [`FieldCodec`], which is the single
//! place that knows how a raw wire string becomes a typed value and back.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Wire format for timestamps (`YYYY-MM-DD HH:MM`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Timestamp layouts accepted on read. Seconds are truncated so a decoded
/// value always matches what [`TIMESTAMP_FORMAT`] writes back.
const TIMESTAMP_READ_FORMATS: &[&str] = &[TIMESTAMP_FORMAT, "%Y-%m-%d %H:%M:%S"];

/// The declared kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Text,
    Timestamp,
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldKind::Int => write!(f, "integer"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Text => write!(f, "text"),
            FieldKind::Timestamp => write!(f, "timestamp"),
            FieldKind::Flag => write!(f, "flag"),
        }
    }
}

/// A Y/N style flag, kept as the literal token found in the file.
///
/// Consumers compare flags symbolically, so no conversion to `bool` happens
/// on read. [`Flag::is_yes`] covers the common case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag(String);

impl Flag {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token is `Y` (case-insensitive, surrounding blanks ignored).
    pub fn is_yes(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case("y")
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Flag {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Conversion between a raw, non-empty wire string and a typed column value.
pub trait FieldCodec: Sized {
    const KIND: FieldKind;

    /// Parses a non-empty raw value. `None` means the text does not fit the kind.
    fn decode(raw: &str) -> Option<Self>;

    fn encode(&self) -> String;
}

impl FieldCodec for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn decode(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<i64>() {
            return Some(value);
        }
        // Some exporters write integral columns as "12.0"
        let (whole, fraction) = raw.split_once('.')?;
        if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') {
            whole.parse::<i64>().ok()
        } else {
            None
        }
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

impl FieldCodec for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn decode(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn encode(&self) -> String {
        crate::xer::utils::format_float(*self)
    }
}

impl FieldCodec for String {
    const KIND: FieldKind = FieldKind::Text;

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn encode(&self) -> String {
        self.clone()
    }
}

impl FieldCodec for NaiveDateTime {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn decode(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        TIMESTAMP_READ_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .and_then(|timestamp| timestamp.with_second(0))
    }

    fn encode(&self) -> String {
        self.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl FieldCodec for Flag {
    const KIND: FieldKind = FieldKind::Flag;

    fn decode(raw: &str) -> Option<Self> {
        Some(Flag(raw.to_string()))
    }

    fn encode(&self) -> String {
        self.0.clone()
    }
}

/// Column type aliases used by the table catalogue.
pub type Int = i64;
pub type Float = f64;
pub type Text = String;
pub type Timestamp = NaiveDateTime;
