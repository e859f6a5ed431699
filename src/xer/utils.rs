//! Small text helpers shared by the reader and the codecs.

use encoding_rs::Encoding;

/// Resolves an encoding label (`"utf-8"`, `"windows-1252"`, `"gbk"`, ...) to an
/// `encoding_rs` encoding.
///
/// Labels follow the WHATWG encoding standard; a few spellings common in XER
/// exports (`"UTF8"`, `"ANSI"`, `"cp1252"`) are normalised first.
pub fn parse_encoding(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    let normalized = match label.to_ascii_lowercase().as_str() {
        "utf8" => "utf-8",
        "ansi" | "cp1252" => "windows-1252",
        _ => label,
    };
    Encoding::for_label(normalized.as_bytes())
}

/// Formats a float with the shortest representation that round-trips.
///
/// Integral values keep a trailing `.0` so that `8` is written as `8.0`.
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        format!("{}.0", text)
    } else {
        text
    }
}
