//! Persisted map of logical file name to last issued record ID.
//!
//! The ledger file holds one `name=integer` line per logical file name:
//!
//! ```text
//! empleados.txt=14
//! usuarios.txt=3
//! ```

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::id::RecordId;
use crate::line::LINE_ENDING;
use crate::swap::PendingFile;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Separator between name and value in a ledger line.
pub const LEDGER_SEPARATOR: char = '=';

/// Checks that `name` round-trips through one ledger line.
///
/// A separator would split the line differently on reload and a line break
/// would start a new entry; either way the counter for `name` is lost and
/// its IDs are issued again.
pub fn validate_name(name: &str) -> StoreResult<()> {
    let reason = if name.is_empty() {
        "empty"
    } else if name.contains(LEDGER_SEPARATOR) {
        "contains '='"
    } else if name.contains(['\n', '\r']) {
        "contains a line break"
    } else {
        return Ok(());
    };
    Err(StoreError::InvalidLedgerName {
        name: name.to_string(),
        reason,
    })
}

/// In-memory copy of the ID ledger.
///
/// Entries iterate in name order, which is also the order they are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdLedger {
    entries: BTreeMap<String, RecordId>,
}

impl IdLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses ledger text read from `source`.
    ///
    /// Lines that do not split into exactly one name and one non-empty value
    /// are skipped. A value that is present but not an integer is an error,
    /// since dropping it would restart that sequence and reissue IDs.
    pub fn parse(source: &Path, text: &str) -> StoreResult<Self> {
        let mut entries = BTreeMap::new();
        for line in text.lines() {
            let mut parts = line.split(LEDGER_SEPARATOR);
            let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let id = RecordId::parse_field(value).map_err(|_| StoreError::InvalidLedgerEntry {
                path: source.to_path_buf(),
                name: name.to_string(),
                value: value.to_string(),
            })?;
            entries.insert(name.to_string(), id);
        }
        Ok(Self { entries })
    }

    /// Reads the ledger at `path`, returning an empty ledger if it is missing.
    pub fn load(path: &Path) -> StoreResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads the ledger at `path`, creating an empty file if it is missing.
    pub fn load_or_create(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)?;
            return Ok(Self::new());
        }
        Self::load(path)
    }

    /// Rewrites every entry to `path` through a temp file swap.
    pub fn save(&self, path: &Path, config: &StoreConfig) -> StoreResult<()> {
        let mut pending = PendingFile::create(path, config)?;
        pending.write_all(self.render().as_bytes())?;
        pending.commit()
    }

    /// Renders the ledger in its on-disk form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, id) in &self.entries {
            out.push_str(name);
            out.push(LEDGER_SEPARATOR);
            out.push_str(&id.to_string());
            out.push_str(LINE_ENDING);
        }
        out
    }

    /// Returns the last ID issued for `name`, or 0 if none was.
    #[must_use]
    pub fn last_issued(&self, name: &str) -> RecordId {
        self.entries.get(name).copied().unwrap_or_default()
    }

    /// Issues the next ID for `name` and records it.
    ///
    /// Names that [`validate_name`] rejects are refused.
    pub fn issue(&mut self, name: &str) -> StoreResult<RecordId> {
        validate_name(name)?;
        let last = self.last_issued(name);
        let next = last
            .get()
            .checked_add(1)
            .map(RecordId::new)
            .ok_or_else(|| StoreError::IdsExhausted {
                name: name.to_string(),
            })?;
        self.entries.insert(name.to_string(), next);
        Ok(next)
    }

    /// Iterates over `(name, last issued)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RecordId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Returns the number of names in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no ID was ever issued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
