//! Next-ID command implementation.

use std::path::Path;
use tracing::info;

/// Runs the next-id command, printing the issued ID.
pub fn run(data_dir: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let planilla = super::open(data_dir)?;
    let id = planilla.ids().next_id(name)?;
    info!(name, %id, "issued id");
    println!("{id}");
    Ok(())
}
