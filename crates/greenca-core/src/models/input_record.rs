use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

/// Ordered mapping of model identifier to value, one entry per feature.
///
/// Entries are kept in insertion order so a record built in schema order
/// reaches the model in schema order. Positional (table-style) models
/// depend on this.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputRecord {
    entries: Vec<(String, f64)>,
}

impl InputRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Build a record from already-ordered entries.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Append an entry at the end of the record.
    pub fn push(&mut self, identifier: impl Into<String>, value: f64) {
        self.entries.push((identifier.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in record order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn get(&self, identifier: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == identifier)
            .map(|(_, v)| *v)
    }

    /// Values as a dense row, in record order.
    pub fn to_row(&self) -> Vec<f64> {
        self.values().collect()
    }
}

impl Serialize for InputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
