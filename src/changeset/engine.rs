//! Changeset application.

use super::mode::Mode;
use super::{GLOBAL_FIELD, HOSTS_FIELD};
use crate::error::Result;
use crate::store::record::key_name;
use crate::store::{field_union, record_from_value, Record, Store};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::fmt;

/// Counts of what one `apply` call did to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Existing entries that received a field-level union
    pub merged: usize,
    /// Keys that were not present before
    pub added: usize,
    /// Existing entries dropped and rebuilt by `replace`
    pub replaced: usize,
    /// Existing entries overwritten by `add`
    pub overwritten: usize,
    pub removed: usize,
}

impl ApplySummary {
    pub fn total(&self) -> usize {
        self.merged + self.added + self.replaced + self.overwritten + self.removed
    }
}

impl fmt::Display for ApplySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} merged, {} added, {} replaced, {} overwritten, {} removed",
            self.merged, self.added, self.replaced, self.overwritten, self.removed
        )
    }
}

/// Apply per-key and global overrides to `store` under `mode`.
///
/// `merge`, `replace`, `add` and `delete` iterate the keys of `per_key`;
/// `filter` iterates the keys of `store`. A malformed entry aborts the call
/// at that key, leaving earlier keys applied. `replace` builds the new
/// record before dropping the old one, so a malformed entry leaves its key
/// untouched. `global` is only checked by modes that use it.
pub fn apply(
    store: &mut Store,
    per_key: &Mapping,
    global: &Value,
    mode: Mode,
) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();
    let general = if mode.uses_global() {
        record_from_value(global, GLOBAL_FIELD)?
    } else {
        Record::new()
    };

    match mode {
        Mode::Merge => {
            for (key, specific) in per_key {
                let key = key_name(key, HOSTS_FIELD)?;
                let changes = changes_for(&key, &general, specific)?;
                tracing::debug!("Updating {} with {:?}", key, changes);
                if store.contains(&key) {
                    summary.merged += 1;
                } else {
                    summary.added += 1;
                }
                store.merge(&key, changes);
            }
        }
        Mode::Replace => {
            for (key, specific) in per_key {
                let key = key_name(key, HOSTS_FIELD)?;
                let changes = changes_for(&key, &general, specific)?;
                tracing::debug!("Replacing {} with {:?}", key, changes);
                if store.remove(&key).is_some() {
                    summary.replaced += 1;
                } else {
                    summary.added += 1;
                }
                store.add(&key, changes);
            }
        }
        Mode::Add => {
            for (key, specific) in per_key {
                let key = key_name(key, HOSTS_FIELD)?;
                let changes = changes_for(&key, &general, specific)?;
                tracing::debug!("Adding {} with {:?}", key, changes);
                if store.add(&key, changes).is_some() {
                    summary.overwritten += 1;
                } else {
                    summary.added += 1;
                }
            }
        }
        Mode::Delete => {
            for key in per_key.keys() {
                let key = key_name(key, HOSTS_FIELD)?;
                if store.remove(&key).is_some() {
                    tracing::debug!("Deleted {}", key);
                    summary.removed += 1;
                }
            }
        }
        Mode::Filter => {
            let keep = per_key
                .keys()
                .map(|key| key_name(key, HOSTS_FIELD))
                .collect::<Result<HashSet<String>>>()?;
            for key in store.keys() {
                if !keep.contains(&key) {
                    tracing::debug!("Filtered out {}", key);
                    store.remove(&key);
                    summary.removed += 1;
                }
            }
        }
    }

    Ok(summary)
}

/// `global ⊕ per_key[key]`, built fresh for every key.
fn changes_for(key: &str, general: &Record, specific: &Value) -> Result<Record> {
    let specific = record_from_value(specific, &format!("{HOSTS_FIELD}.{key}"))?;
    Ok(field_union(general, &specific))
}
