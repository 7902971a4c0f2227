//! Ordered key → record store.

use super::record::{into_record, key_name, overlay_fields, Record};
use crate::error::{kind_of, Error, Result};
use serde_yaml::{Mapping, Value};

/// The keyed body of a document (e.g. every host), in insertion order.
///
/// Every entry is a mapping; the constructors enforce this so the mutating
/// operations below never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    entries: Mapping,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a parsed document. Null loads as an empty store.
    pub fn from_value(value: Value) -> Result<Self> {
        let entries = match value {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(entries) => entries,
            other => {
                return Err(Error::TypeMismatch {
                    context: "document".to_string(),
                    expected: "mapping",
                    found: kind_of(&other),
                })
            }
        };

        let mut store = Self::new();
        for (key, value) in entries {
            let name = key_name(&key, "document")?;
            let record = into_record(value, &name)?;
            store.entries.insert(Value::String(name), Value::Mapping(record));
        }
        Ok(store)
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key).and_then(Value::as_mapping)
    }

    /// Current keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().filter_map(Value::as_str).map(str::to_owned).collect()
    }

    /// Insert `record` under `key`.
    ///
    /// Re-adding an existing key overwrites it in place and logs a warning;
    /// the previous record is returned.
    pub fn add(&mut self, key: &str, record: Record) -> Option<Record> {
        let previous = self.entries.insert(Value::String(key.to_owned()), Value::Mapping(record));
        if previous.is_some() {
            tracing::warn!("Key '{}' already exists, overwriting", key);
        }
        previous.and_then(|value| match value {
            Value::Mapping(fields) => Some(fields),
            _ => None,
        })
    }

    /// Delete `key`; absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Record> {
        self.entries.shift_remove(key).and_then(|value| match value {
            Value::Mapping(fields) => Some(fields),
            _ => None,
        })
    }

    /// Shallow field-level union into the existing record, or `add` when
    /// `key` is absent.
    pub fn merge(&mut self, key: &str, record: Record) {
        if let Some(Value::Mapping(existing)) = self.entries.get_mut(key) {
            overlay_fields(existing, record);
            return;
        }
        self.add(key, record);
    }
}
