//! confgen: apply keyed changesets onto configuration documents
//!
//! Merges global and per-host overrides into a base document and relocates
//! standalone comments so they survive a save/reload round trip.

use anyhow::Result;

fn main() -> Result<()> {
    confgen::cli::run()
}
