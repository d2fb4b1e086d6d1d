//! Error types for store operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Stage of the temp-file swap that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStage {
    /// Renaming the temporary file over the original.
    Rename,
    /// Syncing the parent directory after the rename.
    SyncDirectory,
}

impl std::fmt::Display for SwapStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rename => f.write_str("rename"),
            Self::SyncDirectory => f.write_str("directory sync"),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The leading field of a record line is not an integer key.
    #[error("invalid record key {value:?} at {}:{line}", path.display())]
    InvalidKey {
        /// File being scanned.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The offending field.
        value: String,
    },

    /// A ledger entry carries a value that is not an integer.
    #[error("invalid ledger entry for {name:?} in {}: {value:?}", path.display())]
    InvalidLedgerEntry {
        /// Ledger file.
        path: PathBuf,
        /// Logical file name of the entry.
        name: String,
        /// The offending value.
        value: String,
    },

    /// A ledger name cannot be written as one `name=integer` line.
    #[error("invalid ledger name {name:?}: {reason}")]
    InvalidLedgerName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The ledger counter for a name cannot be incremented further.
    #[error("record IDs exhausted for {name:?}")]
    IdsExhausted {
        /// Logical file name.
        name: String,
    },

    /// Replacing the original with the rewritten temp file failed.
    ///
    /// The data file is in an unspecified state and needs manual inspection.
    #[error("failed to replace {} during {stage}: {source}", path.display())]
    Replace {
        /// The file being replaced.
        path: PathBuf,
        /// Which step of the swap failed.
        stage: SwapStage,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates an invalid key error.
    pub fn invalid_key(path: impl Into<PathBuf>, line: usize, value: impl Into<String>) -> Self {
        Self::InvalidKey {
            path: path.into(),
            line,
            value: value.into(),
        }
    }

    /// Creates a replace failure.
    pub fn replace(path: impl Into<PathBuf>, stage: SwapStage, source: io::Error) -> Self {
        Self::Replace {
            path: path.into(),
            stage,
            source,
        }
    }

    /// Returns true if the data file may have been left in an unspecified state.
    #[must_use]
    pub fn is_replace_failure(&self) -> bool {
        matches!(self, Self::Replace { .. })
    }
}
