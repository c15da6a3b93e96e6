use std::collections::HashMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        RowId(value)
    }
}

impl From<RowId> for u64 {
    fn from(value: RowId) -> Self {
        value.0
    }
}

/// One parsed worksheet row: header/text pairs in sheet column order.
/// Empty cells are absent rather than stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }

    /// Sets `key` to `value`, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A table row: the record it was ingested from plus its session identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    record: Record,
}

impl Row {
    pub fn new(id: RowId, record: Record) -> Self {
        Self { id, record }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.record.get(column)
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Copy of this row with one value replaced; identity is preserved.
    pub fn with_value(&self, column: &str, value: impl Into<String>) -> Self {
        let mut record = self.record.clone();
        record.insert(column, value);
        Self {
            id: self.id,
            record,
        }
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.record.serialize(serializer)
    }
}

/// Rows are shared behind `Arc` so snapshots stay valid across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Arc<Row>>,
    positions: HashMap<RowId, usize>,
}

impl Table {
    /// Builds a table whose columns come from the first row's keys.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.record().keys().map(str::to_string).collect())
            .unwrap_or_default();
        let positions = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.id(), index))
            .collect();
        Self {
            columns,
            rows: rows.into_iter().map(Arc::new).collect(),
            positions,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index).map(Arc::as_ref)
    }

    pub fn find(&self, id: RowId) -> Option<&Row> {
        self.positions.get(&id).and_then(|index| self.row(*index))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn set_value(&mut self, index: usize, column: &str, value: impl Into<String>) -> bool {
        let Some(slot) = self.rows.get_mut(index) else {
            return false;
        };
        *slot = Arc::new(slot.with_value(column, value));
        true
    }
}
