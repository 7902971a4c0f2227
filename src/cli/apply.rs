//! Apply command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::changeset::{Changeset, Mode};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::document::{Document, Format};
use crate::store::Store;

#[derive(Args)]
pub struct ApplyArgs {
    /// Changeset document with `global` and `hosts` sections
    #[arg(short = 'i', long, value_name = "FILE", env = "CONFGEN_INPUT")]
    pub input: PathBuf,

    /// Base document, updated in place
    #[arg(short = 'o', long, value_name = "FILE", env = "CONFGEN_OUTPUT")]
    pub output: PathBuf,

    /// Update policy
    #[arg(short = 'm', long, value_enum, env = "CONFGEN_MODE")]
    pub mode: Option<Mode>,

    /// Document format (default: inferred from each file's extension)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<Format>,

    /// Print the result instead of rewriting the output file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: ApplyArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let file_config = load_config(&cwd, config_path)?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { mode: args.mode, format: args.format, comment_marker: None },
    );

    let mut input = Document::load(&args.input, config.format)?;
    let changeset = Changeset::from_value(input.take_value())
        .with_context(|| format!("Invalid changeset document: {}", args.input.display()))?;

    let mut output = Document::load(&args.output, config.format)?;
    let mut store = Store::from_value(output.take_value())
        .with_context(|| format!("Invalid base document: {}", args.output.display()))?;

    let summary = changeset
        .apply_to(&mut store, config.mode)
        .with_context(|| format!("Failed to apply changeset in {} mode", config.mode))?;
    tracing::info!("Applied {} changeset to {}: {}", config.mode, output.label(), summary);

    output.set_value(store.into_value());
    if args.stdout {
        print!("{}", output.render()?);
    } else {
        output.save()?;
    }

    Ok(())
}
