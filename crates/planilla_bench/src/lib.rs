//! Benchmark utilities.

use planilla_store::{RecordId, RecordStore, StoreResult};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::Path;

/// Generate a random alphanumeric field of `len` characters.
pub fn random_field(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generate a row with key `id` followed by `width` random fields.
pub fn random_row(id: i64, width: usize, field_len: usize) -> Vec<String> {
    let mut row = Vec::with_capacity(width + 1);
    row.push(RecordId::new(id).to_string());
    row.extend((0..width).map(|_| random_field(field_len)));
    row
}

/// Fill `path` with `count` rows keyed 1..=count.
pub fn populate(store: &RecordStore, path: &Path, count: usize, width: usize) -> StoreResult<()> {
    for id in 1..=count as i64 {
        store.append(path, &random_row(id, width, 12))?;
    }
    Ok(())
}
