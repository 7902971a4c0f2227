//! Core error types.

use serde_yaml::Value;
use thiserror::Error;

/// Errors raised by the store and the changeset engine.
///
/// Document I/O and configuration loading report through `anyhow` instead;
/// these are the conditions the core itself can detect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value had the wrong shape, e.g. a scalar where a record was expected
    #[error("Type mismatch at '{context}': expected {expected}, got {found}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Keys of a store or per-key changeset must be strings
    #[error("Non-string key in '{context}': {key}")]
    NonStringKey { context: String, key: String },

    /// Mode name outside merge|replace|add|delete|filter
    #[error("Unknown mode '{0}' (expected one of: merge, replace, add, delete, filter)")]
    UnknownMode(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Short type name used in mismatch diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
