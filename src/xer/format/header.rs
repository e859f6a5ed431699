//! The `ERMHDR` export header row.
//!
//! ```text
//! ERMHDR  8.0  2021-11-02  Project  admin  Admin  dbxDatabaseNoName  Project Management  USD
//!         │    │           │        │      │      │                  │                   └ currency
//!         │    │           │        │      │      │                  └ product module
//!         │    │           │        │      │      └ database
//!         │    │           │        │      └ user name
//!         │    │           │        └ user login
//!         │    │           └ export type
//!         │    └ export date
//!         └ format version
//! ```

use chrono::Local;
use log::debug;

use super::tokenizer::EXPORT_HEADER_MARKER;

/// Metadata from the opening `ERMHDR` row. Every column is kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportHeader {
    pub version: String,
    pub export_date: String,
    pub export_type: String,
    pub user_login: String,
    pub user_name: String,
    pub database: String,
    pub module: String,
    pub currency: String,
    /// Columns past the currency, written back verbatim.
    pub extra: Vec<String>,
}

impl ExportHeader {
    /// Builds a header from the columns following the `ERMHDR` marker.
    /// Missing columns become empty strings.
    pub fn from_values(values: &[&str]) -> Self {
        let column = |index: usize| values.get(index).map(|v| v.to_string()).unwrap_or_default();
        let header = Self {
            version: column(0),
            export_date: column(1),
            export_type: column(2),
            user_login: column(3),
            user_name: column(4),
            database: column(5),
            module: column(6),
            currency: column(7),
            extra: values.iter().skip(8).map(|v| v.to_string()).collect(),
        };
        debug!(
            "Export header: version={}, date={}, type={}, currency={}",
            header.version, header.export_date, header.export_type, header.currency
        );
        header
    }

    /// The row as written, marker included, without the line terminator.
    pub fn to_row(&self) -> String {
        let mut columns = vec![
            EXPORT_HEADER_MARKER,
            self.version.as_str(),
            self.export_date.as_str(),
            self.export_type.as_str(),
            self.user_login.as_str(),
            self.user_name.as_str(),
            self.database.as_str(),
            self.module.as_str(),
            self.currency.as_str(),
        ];
        columns.extend(self.extra.iter().map(String::as_str));
        columns.join("\t")
    }
}

impl Default for ExportHeader {
    /// A version 8.0 project export dated today.
    fn default() -> Self {
        Self {
            version: "8.0".to_string(),
            export_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            export_type: "Project".to_string(),
            user_login: "admin".to_string(),
            user_name: "Admin".to_string(),
            database: "dbxDatabaseNoName".to_string(),
            module: "Project Management".to_string(),
            currency: "USD".to_string(),
            extra: Vec::new(),
        }
    }
}
