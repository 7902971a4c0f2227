//! CLI-over-file precedence.

use crate::changeset::Mode;
use crate::document::Format;
use crate::domain::Config;

/// Values given on the command line (or through `CONFGEN_*` variables).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mode: Option<Mode>,
    pub format: Option<Format>,
    pub comment_marker: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if cli.format.is_some() {
        config.format = cli.format;
    }
    if let Some(marker) = cli.comment_marker {
        config.comment_marker = marker;
    }
    config
}
