//! Comments command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::comments::{CommentRelocator, Transform};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};

#[derive(Args)]
pub struct CommentsArgs {
    /// Transform to apply
    #[arg(value_enum)]
    pub transform: Transform,

    /// Input file (stdin when omitted or '-')
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Line-comment marker
    #[arg(long, value_name = "STR")]
    pub marker: Option<String>,
}

pub fn run(args: CommentsArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = merge_cli_with_config(
        load_config(&cwd, config_path)?,
        CliOverrides { comment_marker: args.marker, ..CliOverrides::default() },
    );

    let text = match args.path.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed reading {}", path.display()))?,
        _ => io::read_to_string(io::stdin()).context("Failed reading stdin")?,
    };

    let relocator = CommentRelocator::with_marker(config.comment_marker);
    let result = relocator.transform(args.transform, &text);
    tracing::debug!("{:?} with marker '{}'", args.transform, relocator.marker());

    match args.output {
        Some(path) => {
            tracing::info!("Writing {}", path.display());
            fs::write(&path, result).with_context(|| format!("Failed writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
