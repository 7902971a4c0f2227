//! Command-line interface for confgen
//!
//! Provides `apply` (alias `baselist`) and `comments` subcommands.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod apply;
mod comments;

/// Apply keyed changesets onto configuration documents
#[derive(Parser)]
#[command(name = "confgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to config file (confgen.toml or .confgen.yaml)
    #[arg(short = 'c', long, global = true, value_name = "FILE", env = "CONFGEN_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a changeset document onto a base document
    #[command(visible_alias = "baselist")]
    Apply(apply::ApplyArgs),

    /// Relocate or strip standalone comment lines
    Comments(comments::CommentsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment is applied first; -v raises the floor.
    let filter = EnvFilter::from_default_env().add_directive(level_for(cli.verbose).into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time().with_target(false))
        .with(filter)
        .try_init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Apply(args) => apply::run(args, config_path),
        Commands::Comments(args) => comments::run(args, config_path),
    }
}

/// Map the `-v` count onto a log level, starting from WARN.
fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
