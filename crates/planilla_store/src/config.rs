//! Store configuration.

/// Configuration shared by [`crate::RecordStore`] and [`crate::IdAllocator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Whether to fsync after appends and before swapping a rewritten file.
    pub sync_on_write: bool,

    /// Suffix appended to a file name to form its rewrite temp file.
    ///
    /// Must be non-empty and differ from `.lock`; rewrites fail with
    /// `InvalidInput` otherwise.
    pub temp_suffix: String,

    /// Whether `next_id` also takes an OS advisory lock on the ledger.
    ///
    /// Without it, ID allocation is only serialized within one process.
    pub advisory_lock: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sync_on_write: true,
            temp_suffix: ".tmp".to_string(),
            advisory_lock: false,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether writes are synced to disk.
    #[must_use]
    pub fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets the temp file suffix.
    #[must_use]
    pub fn temp_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.temp_suffix = suffix.into();
        self
    }

    /// Sets whether ID allocation takes a cross-process advisory lock.
    #[must_use]
    pub fn advisory_lock(mut self, value: bool) -> Self {
        self.advisory_lock = value;
        self
    }
}
