//! Update policy selector.

use crate::error::Error;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(try_from = "String")]
pub enum Mode {
    /// Field-level union into existing entries
    #[default]
    Merge,
    /// Drop existing entries, then add the changeset's fields
    Replace,
    /// Add entries, overwriting (with a warning) on conflict
    Add,
    /// Remove the changeset's keys
    Delete,
    /// Keep only the changeset's keys
    Filter,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Merge, Mode::Replace, Mode::Add, Mode::Delete, Mode::Filter];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Merge => "merge",
            Mode::Replace => "replace",
            Mode::Add => "add",
            Mode::Delete => "delete",
            Mode::Filter => "filter",
        }
    }

    /// Whether the `global` record takes part in this mode.
    pub fn uses_global(self) -> bool {
        match self {
            Mode::Merge | Mode::Replace | Mode::Add => true,
            Mode::Delete | Mode::Filter => false,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for Mode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
