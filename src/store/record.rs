//! Records: ordered field maps.
//!
//! A `Record` is an owned `serde_yaml::Mapping`. Cloning one is a deep copy,
//! so a record handed to the store never aliases the changeset it came from.

use crate::error::{kind_of, Error, Result};
use serde_yaml::{Mapping, Value};

/// One entity's settings, in document order.
pub type Record = Mapping;

/// Borrow `value` as a record and return an owned copy.
///
/// Null is accepted as the empty record (`host:` with nothing under it).
pub fn record_from_value(value: &Value, context: &str) -> Result<Record> {
    match value {
        Value::Null => Ok(Record::new()),
        Value::Mapping(fields) => Ok(fields.clone()),
        other => Err(mismatch(context, other)),
    }
}

/// Owned variant of [`record_from_value`].
pub fn into_record(value: Value, context: &str) -> Result<Record> {
    match value {
        Value::Null => Ok(Record::new()),
        Value::Mapping(fields) => Ok(fields),
        other => Err(mismatch(context, &other)),
    }
}

/// Shallow field-level union: every field of `overlay` overwrites the same
/// field in `base`, fields only in `base` survive. Nested mappings are
/// replaced wholesale, never merged recursively.
pub fn overlay_fields(base: &mut Record, overlay: Record) {
    for (field, value) in overlay {
        base.insert(field, value);
    }
}

/// Fresh union of `general` and `specific`; `specific` wins on conflict.
pub fn field_union(general: &Record, specific: &Record) -> Record {
    let mut union = general.clone();
    overlay_fields(&mut union, specific.clone());
    union
}

pub(crate) fn key_name(key: &Value, context: &str) -> Result<String> {
    match key {
        Value::String(name) => Ok(name.clone()),
        other => Err(Error::NonStringKey {
            context: context.to_string(),
            key: serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| kind_of(other).to_string()),
        }),
    }
}

fn mismatch(context: &str, found: &Value) -> Error {
    Error::TypeMismatch { context: context.to_string(), expected: "mapping", found: kind_of(found) }
}
