//! Verify command implementation.

use planilla_core::{Planilla, RecordCodec, Repository};
use planilla_store::RecordId;
use std::collections::HashSet;
use std::path::Path;

/// Verification result for one table.
#[derive(Debug, Default)]
pub struct VerifyResult {
    /// Number of rows checked.
    pub rows_checked: usize,
    /// Number of rows the entity accepts.
    pub valid_rows: usize,
    /// Problems found, one per line.
    pub errors: Vec<String>,
    /// Largest key seen.
    pub max_key: Option<RecordId>,
}

impl VerifyResult {
    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs the verify command.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let planilla = super::open(data_dir)?;
    println!("Verifying data directory at {}", data_dir.display());
    println!();

    let employees = check_table(&planilla, &planilla.employees())?;
    let users = check_table(&planilla, &planilla.users())?;

    println!();
    if employees.is_ok() && users.is_ok() {
        println!("✓ Verification passed");
        Ok(())
    } else {
        println!("✗ Verification failed");
        Err("Verification failed".into())
    }
}

fn check_table<T: RecordCodec>(
    planilla: &Planilla,
    table: &Repository<T>,
) -> Result<VerifyResult, Box<dyn std::error::Error>> {
    let name = table.ledger_name();
    if !table.path().exists() {
        println!("{name}: not found (this may be normal for new data directories)");
        return Ok(VerifyResult::default());
    }

    let mut result = verify_rows::<T>(&table.raw_rows()?);
    let last_issued = planilla.ids().last_issued(name)?;
    if let Some(max) = result.max_key {
        if max > last_issued {
            result.errors.push(format!(
                "Key {max} is above the ledger's last issued ID {last_issued}"
            ));
        }
    }

    println!(
        "{name}: {} rows checked, {} valid",
        result.rows_checked, result.valid_rows
    );
    for error in &result.errors {
        println!("  - {error}");
    }
    Ok(result)
}

/// Checks rows for decode failures and duplicate keys.
pub fn verify_rows<T: RecordCodec>(rows: &[Vec<String>]) -> VerifyResult {
    let mut result = VerifyResult::default();
    let mut seen = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;
        result.rows_checked += 1;

        let key = row.first().map(|field| RecordId::parse_field(field));
        match key {
            Some(Ok(id)) => {
                if !seen.insert(id) {
                    result.errors.push(format!("Line {line}: duplicate key {id}"));
                }
                result.max_key = result.max_key.max(Some(id));
            }
            _ => {
                result.errors.push(format!("Line {line}: key is not an integer"));
                continue;
            }
        }

        match T::decode_row(row) {
            Ok(_) => result.valid_rows += 1,
            Err(e) => result.errors.push(format!("Line {line}: {e}")),
        }
    }

    result
}
