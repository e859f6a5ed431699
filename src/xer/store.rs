//! Append-only, insertion-ordered storage for one table.
//!
//! Besides the rows themselves a store keeps two indexes, both built on push:
//! primary key to position, and for every column in [`Record::REFERENCES`]
//! referenced id to the positions holding it. Lookups never reorder rows.

use std::collections::HashMap;

use log::warn;

use crate::xer::types::schema::Record;

#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    by_key: HashMap<R::Key, usize>,
    by_reference: HashMap<&'static str, HashMap<i64, Vec<usize>>>,
    duplicates: Vec<R::Key>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            by_key: HashMap::new(),
            by_reference: HashMap::new(),
            duplicates: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and indexes it.
    ///
    /// A repeated primary key is accepted: both rows stay in the store and
    /// key lookup resolves to the later one. The key is remembered in
    /// [`RecordStore::duplicate_keys`].
    pub fn push(&mut self, record: R) {
        let position = self.records.len();
        if let Some(key) = record.key() {
            if self.by_key.insert(key.clone(), position).is_some() {
                warn!("{}: duplicate primary key {:?}", R::TABLE, key);
                self.duplicates.push(key);
            }
        }
        for &field in R::REFERENCES {
            if let Some(id) = record.reference(field) {
                self.by_reference
                    .entry(field)
                    .or_default()
                    .entry(id)
                    .or_default()
                    .push(position);
            }
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in insertion order. Each call starts a fresh traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Primary key lookup. `None` for unknown keys, including on an empty store.
    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.by_key.get(key).map(|&position| &self.records[position])
    }

    /// Rows whose indexed column `field` equals `id`, in insertion order.
    ///
    /// Columns that are not indexed yield nothing.
    pub fn referencing<'s>(&'s self, field: &str, id: i64) -> impl Iterator<Item = &'s R> + 's {
        self.by_reference
            .get(field)
            .and_then(|index| index.get(&id))
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&position| &self.records[position])
    }

    /// Keys seen more than once, in the order the repeats were pushed.
    pub fn duplicate_keys(&self) -> &[R::Key] {
        &self.duplicates
    }
}

/// Stores compare by their rows; the indexes are derived from them.
impl<R: Record> PartialEq for RecordStore<R> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<'s, R: Record> IntoIterator for &'s RecordStore<R> {
    type Item = &'s R;
    type IntoIter = std::slice::Iter<'s, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Record> Extend<R> for RecordStore<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, records: I) {
        for record in records {
            self.push(record);
        }
    }
}
