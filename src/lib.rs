//! confgen: apply keyed changesets onto configuration documents
//!
//! The core is three pieces: [`Store`], an ordered key → record map;
//! [`changeset::apply`], which folds global and per-key overrides into a
//! store under a [`Mode`]; and [`CommentRelocator`], a pure line transform
//! that keeps standalone comments next to the line they annotate.
//! Everything else (documents on disk, config, CLI) is glue.

pub mod changeset;
pub mod cli;
pub mod comments;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod store;

pub use changeset::{apply, ApplySummary, Changeset, Mode};
pub use comments::{CommentRelocator, Transform};
pub use error::{Error, Result};
pub use store::{Record, Store};
