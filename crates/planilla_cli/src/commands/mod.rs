//! CLI command implementations.

pub mod dump;
pub mod ledger;
pub mod list;
pub mod next_id;
pub mod verify;

use clap::ValueEnum;
use planilla_core::{Config, Planilla};
use std::path::Path;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Opens an existing data directory.
pub fn open(path: &Path) -> Result<Planilla, Box<dyn std::error::Error>> {
    Ok(Planilla::open(Config::new(path).create_if_missing(false))?)
}
