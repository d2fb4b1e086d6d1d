//! Error types for Planilla core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in entity operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record store or ID ledger error.
    #[error("store error: {0}")]
    Store(#[from] planilla_store::StoreError),

    /// I/O error outside the store (data directory handling).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A field value cannot be stored or decoded.
    #[error("invalid {field}: {value:?} ({reason})")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A row has a field count the entity does not accept.
    #[error("expected one of {expected:?} fields, got {actual}")]
    FieldCount {
        /// Accepted field counts.
        expected: &'static [usize],
        /// Field count of the row.
        actual: usize,
    },

    /// The data directory is missing or unusable.
    #[error("invalid data directory {}: {message}", path.display())]
    DataDir {
        /// The configured directory.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            reason,
        }
    }

    /// Creates a data directory error.
    pub fn data_dir(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataDir {
            path: path.into(),
            message: message.into(),
        }
    }
}
