//! Monotonic record ID allocation backed by the ledger file.

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::id::RecordId;
use crate::ledger::{validate_name, IdLedger};
use crate::swap::lock_path;
use fs2::FileExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Process-wide mutexes, one per ledger file.
static LEDGER_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

fn ledger_lock(path: &Path) -> Arc<Mutex<()>> {
    let registry = LEDGER_LOCKS.get_or_init(Default::default);
    let key = lock_key(path);
    registry.lock().entry(key).or_default().clone()
}

/// Resolves the parent directory so that `./id.txt` and `id.txt` share a lock.
fn lock_key(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Exclusive OS lock held for one allocation; released on drop.
struct LedgerFileLock(File);

impl LedgerFileLock {
    fn acquire(ledger: &Path) -> StoreResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path(ledger)?)?;
        file.lock_exclusive()?;
        Ok(Self(file))
    }
}

impl Drop for LedgerFileLock {
    fn drop(&mut self) {
        let _ = self.0.unlock();
    }
}

/// Issues record IDs per logical file name.
///
/// Every call to [`IdAllocator::next_id`] re-reads the ledger from disk,
/// bumps the counter for the requested name, and rewrites the whole ledger.
/// Nothing is cached between calls.
///
/// # Concurrency
///
/// Allocations against the same ledger path are serialized across all
/// allocators in the process, so no two in-process callers get the same ID.
/// Separate processes are **not** coordinated unless
/// [`StoreConfig::advisory_lock`] is enabled; without it two processes can
/// read the same counter and issue duplicate IDs. Deployments with more than
/// one writer process need the advisory lock or a single process owning the
/// ledger.
///
/// # Example
///
/// ```no_run
/// use planilla_store::{IdAllocator, RecordId};
///
/// let ids = IdAllocator::new("idControl.txt");
/// assert_eq!(ids.next_id("empleados.txt").unwrap(), RecordId::new(1));
/// assert_eq!(ids.next_id("empleados.txt").unwrap(), RecordId::new(2));
/// ```
#[derive(Debug, Clone)]
pub struct IdAllocator {
    path: PathBuf,
    config: StoreConfig,
    lock: Arc<Mutex<()>>,
}

impl IdAllocator {
    /// Creates an allocator over the ledger at `path` with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, StoreConfig::default())
    }

    /// Creates an allocator with the given configuration.
    pub fn with_config(path: impl Into<PathBuf>, config: StoreConfig) -> Self {
        let path = path.into();
        let lock = ledger_lock(&path);
        Self { path, config, lock }
    }

    /// Returns the ledger path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Issues the next ID for `name`, persisting it before returning.
    ///
    /// The first ID for a name is 1. The ledger file is created if missing.
    ///
    /// # Errors
    ///
    /// - [`crate::StoreError::InvalidLedgerName`] if `name` is empty or holds `=`
    ///   or a line break; the ledger is not touched
    /// - Any error creating, reading, parsing, or writing the ledger. When
    ///   the write fails the ID is not considered issued.
    pub fn next_id(&self, name: &str) -> StoreResult<RecordId> {
        validate_name(name)?;
        let _guard = self.lock.lock();
        let _file_lock = if self.config.advisory_lock {
            Some(LedgerFileLock::acquire(&self.path)?)
        } else {
            None
        };

        let mut ledger = IdLedger::load_or_create(&self.path)?;
        let id = ledger.issue(name)?;
        ledger.save(&self.path, &self.config)?;

        debug!(ledger = %self.path.display(), name, %id, "issued record id");
        Ok(id)
    }

    /// Returns the last ID issued for `name` without changing anything.
    pub fn last_issued(&self, name: &str) -> StoreResult<RecordId> {
        Ok(self.snapshot()?.last_issued(name))
    }

    /// Reads the current ledger without creating or modifying it.
    pub fn snapshot(&self) -> StoreResult<IdLedger> {
        IdLedger::load(&self.path)
    }
}
