use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::Encoding;
use log::{debug, info, warn};

use super::format::header::ExportHeader;
use super::format::tokenizer::{tokenize, Token};
use super::format::writer;
use super::graph::XerData;
use super::types::error::{ParseWarning, Result, XerError};
use super::types::tables::Table;

/// A parsed XER file.
///
/// Reading is a single blocking pass. Recoverable problems are collected in
/// [`XerReader::warnings`]; a field that does not fit its declared kind aborts
/// the whole parse.
#[derive(Debug, Clone)]
pub struct XerReader {
    /// The `ERMHDR` row, if the file had one.
    pub header: Option<ExportHeader>,
    pub data: XerData,
    pub warnings: Vec<ParseWarning>,
    /// The text encoding the input was decoded with.
    pub encoding: &'static Encoding,
}

impl XerReader {
    /// Read an XER file from the given path.
    ///
    /// Files are decoded as UTF-8 unless `user_encoding` names another
    /// encoding (any WHATWG label `encoding_rs` knows, e.g. `"windows-1252"`).
    /// A byte-order mark overrides both. Malformed byte sequences are replaced,
    /// never fatal.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - `user_encoding` is not a known label
    /// - A field value does not match its column kind
    pub fn new(path: impl AsRef<Path>, user_encoding: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening XER file: {}", path.display());

        let encoding = match user_encoding {
            Some(label) => super::utils::parse_encoding(label)
                .ok_or_else(|| XerError::UnsupportedEncoding(label.to_string()))?,
            None => encoding_rs::UTF_8,
        };

        let bytes = fs::read(path)?;
        let (text, actual, had_errors) = encoding.decode(&bytes);
        if actual != encoding {
            info!(
                "Text encoding overridden by byte-order mark: requested='{}', final='{}'",
                encoding.name(),
                actual.name()
            );
        }
        if had_errors {
            warn!("Malformed {} sequences replaced while decoding", actual.name());
        }

        let mut reader = Self::parse(&text)?;
        reader.encoding = actual;
        Ok(reader)
    }

    /// Parse XER text already held in memory.
    pub fn parse(text: &str) -> Result<Self> {
        let mut header = None;
        let mut data = XerData::new();
        let mut warnings = Vec::new();
        let mut skipping = false;
        let mut ended = false;

        for token in tokenize(text) {
            match token {
                Token::ExportHeader { values, .. } => {
                    header = Some(ExportHeader::from_values(&values));
                }
                Token::TableStart { line, name } => {
                    skipping = Table::from_name(name).is_none();
                    if skipping {
                        debug!("line {}: no schema for table '{}', skipping block", line, name);
                        warnings.push(ParseWarning::UnknownTable {
                            table: name.to_string(),
                            line,
                        });
                    }
                }
                Token::Record(raw) => {
                    if !skipping {
                        data.insert_raw(&raw)?;
                    }
                }
                Token::Warning(warning) => {
                    if !skipping {
                        warnings.push(warning);
                    }
                }
                Token::End { .. } => ended = true,
            }
        }

        if !ended {
            debug!("Input ended without a %E row");
        }
        info!(
            "XER parsed: {} records across {} tables, {} warnings",
            data.total_records(),
            data.populated_tables().count(),
            warnings.len()
        );

        Ok(Self {
            header,
            data,
            warnings,
            encoding: encoding_rs::UTF_8,
        })
    }

    /// The header written by [`XerReader::write`]: the parsed one, or a default.
    pub fn export_header(&self) -> ExportHeader {
        self.header.clone().unwrap_or_default()
    }

    /// Writes the graph to `path` as UTF-8.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_with_header(path, &self.export_header())
    }

    /// Writes the graph to `path` with an explicit header row.
    pub fn write_with_header(&self, path: impl AsRef<Path>, header: &ExportHeader) -> Result<()> {
        let path = path.as_ref();
        info!("Writing XER file: {}", path.display());
        let file = File::create(path)?;
        writer::write(&self.data, header, BufWriter::new(file))
    }

    /// The whole file as text, as [`XerReader::write`] would produce it.
    pub fn to_xer_string(&self) -> Result<String> {
        writer::to_string(&self.data, &self.export_header())
    }

    /// Record counts for every populated table, in emission order.
    pub fn summary(&self) -> Vec<(Table, usize)> {
        self.data
            .populated_tables()
            .map(|table| (table, self.data.count(table)))
            .collect()
    }
}

impl FromStr for XerReader {
    type Err = XerError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}
