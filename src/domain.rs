//! Tool configuration shared by the config loader and the CLI.

use crate::changeset::Mode;
use crate::comments::DEFAULT_MARKER;
use crate::document::Format;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Update policy used when `--mode` is not given
    pub mode: Mode,
    /// Document dialect; inferred from each file's extension when unset
    pub format: Option<Format>,
    /// Line-comment marker for the `comments` transforms
    pub comment_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { mode: Mode::Merge, format: None, comment_marker: DEFAULT_MARKER.to_string() }
    }
}
