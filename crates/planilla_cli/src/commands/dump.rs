//! Dump command implementation.

use super::OutputFormat;
use planilla_store::RecordStore;
use std::path::Path;

/// Runs the dump command.
///
/// Prints every row of `file` exactly as the store reads it, including rows
/// no entity accepts.
pub fn run(
    data_dir: &Path,
    file: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_dir.join(file);
    if !path.exists() {
        return Err(format!("No table found at {}", path.display()).into());
    }

    let rows = RecordStore::new().read_all(&path)?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for (index, row) in rows.iter().enumerate() {
                println!("{:>5}  [{}] {}", index + 1, row.len(), row.join(" | "));
            }
            println!();
            println!("{} rows", rows.len());
        }
    }

    Ok(())
}
