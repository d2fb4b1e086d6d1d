//! Ledger command implementation.

use super::OutputFormat;
use serde::Serialize;
use std::path::Path;

/// One ledger entry.
#[derive(Debug, Serialize)]
pub struct LedgerEntry {
    /// Sequence name.
    pub name: String,
    /// Last issued ID.
    pub last_issued: i64,
}

/// Runs the ledger command.
pub fn run(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let planilla = super::open(data_dir)?;
    let ledger = planilla.ids().snapshot()?;

    let entries: Vec<LedgerEntry> = ledger
        .iter()
        .map(|(name, id)| LedgerEntry {
            name: name.to_string(),
            last_issued: id.get(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            println!("Ledger: {}", planilla.ids().path().display());
            if entries.is_empty() {
                println!("  (empty)");
            }
            for entry in &entries {
                println!("  {:<24} {}", entry.name, entry.last_issued);
            }
        }
    }

    Ok(())
}
