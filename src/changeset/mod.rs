//! Changesets: global and per-key overrides applied to a store
//!
//! A changeset document carries two recognized top-level fields:
//! `global`, broadcast to every key, and `hosts`, the per-key overrides.
//! Anything else at the top level is ignored.

pub mod engine;
pub mod mode;

pub use engine::{apply, ApplySummary};
pub use mode::Mode;

use crate::error::{kind_of, Error, Result};
use crate::store::{Record, Store};
use serde_yaml::{Mapping, Value};

pub const GLOBAL_FIELD: &str = "global";
pub const HOSTS_FIELD: &str = "hosts";

/// Override data, kept as parsed. Entry shapes are only checked when a
/// mode actually needs the field union.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changeset {
    pub global: Value,
    pub per_key: Mapping,
}

impl Changeset {
    pub fn new(global: Record, per_key: Store) -> Self {
        let per_key = match per_key.into_value() {
            Value::Mapping(entries) => entries,
            _ => Mapping::new(),
        };
        Self { global: Value::Mapping(global), per_key }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let top = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(top) => top,
            other => {
                return Err(Error::TypeMismatch {
                    context: "changeset".to_string(),
                    expected: "mapping",
                    found: kind_of(&other),
                })
            }
        };

        let global = top.get(GLOBAL_FIELD).cloned().unwrap_or(Value::Null);
        let per_key = match top.get(HOSTS_FIELD) {
            None | Some(Value::Null) => Mapping::new(),
            Some(Value::Mapping(entries)) => entries.clone(),
            Some(other) => {
                return Err(Error::TypeMismatch {
                    context: HOSTS_FIELD.to_string(),
                    expected: "mapping",
                    found: kind_of(other),
                })
            }
        };

        Ok(Self { global, per_key })
    }

    pub fn is_empty(&self) -> bool {
        self.per_key.is_empty()
    }

    pub fn apply_to(&self, store: &mut Store, mode: Mode) -> Result<ApplySummary> {
        apply(store, &self.per_key, &self.global, mode)
    }
}
