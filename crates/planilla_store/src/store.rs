//! CRUD over comma-delimited record files.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::id::RecordId;
use crate::line::{join_fields, key_field, split_fields, strip_line_ending, LINE_ENDING};
use crate::swap::PendingFile;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

/// What to do with the lines whose key matches in
/// [`RecordStore::replace_or_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordChange {
    /// Write these fields in place of each matching line.
    Replace(Vec<String>),
    /// Drop each matching line.
    Delete,
}

impl RecordChange {
    /// Creates a replacement from any sequence of fields.
    pub fn replace<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Replace(fields.into_iter().map(Into::into).collect())
    }

    /// Returns true for [`RecordChange::Delete`].
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// Line-oriented record store.
///
/// Every operation takes the target file explicitly; the store itself holds
/// no per-file state, so one instance can serve any number of tables.
///
/// # File format
///
/// One record per line, fields joined with `,`, no header, no quoting. Field 0
/// must be an integer key for [`RecordStore::replace_or_delete`] to scan the
/// file; [`RecordStore::read_all`] accepts any line.
///
/// # Concurrency
///
/// Calls block on file I/O and take no locks. A `read_all` racing an
/// `append` from another thread or process may observe a partial line, and
/// two concurrent rewrites of the same file lose one of the updates. The
/// store assumes a single writer per file.
///
/// # Example
///
/// ```no_run
/// use planilla_store::{RecordChange, RecordId, RecordStore};
///
/// let store = RecordStore::new();
/// store.append("emp.txt", &["1", "Ana", "Lopez"]).unwrap();
/// store
///     .replace_or_delete("emp.txt", RecordId::new(1), &RecordChange::replace(["1", "Ana", "Gomez"]))
///     .unwrap();
/// assert_eq!(store.read_all("emp.txt").unwrap(), vec![vec!["1", "Ana", "Gomez"]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    config: StoreConfig,
}

impl RecordStore {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Appends one record to `path`, creating the file if needed.
    ///
    /// The line and its terminator go out in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, written, or synced.
    pub fn append<S: AsRef<str>>(&self, path: impl AsRef<Path>, fields: &[S]) -> StoreResult<()> {
        let path = path.as_ref();
        let mut line = join_fields(fields);
        line.push_str(LINE_ENDING);

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        if self.config.sync_on_write {
            file.sync_data()?;
        }

        debug!(path = %path.display(), fields = fields.len(), "appended record");
        Ok(())
    }

    /// Reads every line of `path` as a field array, in file order.
    ///
    /// A missing file is an empty table. Lines are returned as-is, whatever
    /// their field count, so malformed rows stay visible to callers. Bytes
    /// that are not valid UTF-8 are read as `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Returns an error for any I/O failure other than the file not existing.
    pub fn read_all(&self, path: impl AsRef<Path>) -> StoreResult<Vec<Vec<String>>> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "record file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let mut raw = Vec::new();
        let mut records = Vec::new();
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&raw);
            records.push(split_fields(strip_line_ending(&text)));
        }
        Ok(records)
    }

    /// Rewrites `path`, replacing or dropping every line whose key equals `key`.
    ///
    /// Lines that do not match are copied byte for byte, whether or not they
    /// are valid UTF-8. The scan does not
    /// stop at the first match. When nothing matches the file is left alone.
    /// Otherwise the rewritten copy is swapped over the original with a
    /// single rename.
    ///
    /// Returns the number of matching lines.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the file is missing or unreadable, or the temp
    ///   file cannot be written
    /// - [`StoreError::InvalidKey`] if any line's first field is not an
    ///   integer; the original is left untouched
    /// - [`StoreError::Replace`] if the final swap fails; the data file must
    ///   then be treated as unspecified
    pub fn replace_or_delete(
        &self,
        path: impl AsRef<Path>,
        key: RecordId,
        change: &RecordChange,
    ) -> StoreResult<usize> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let mut pending = PendingFile::create(path, &self.config)?;

        let replacement = match change {
            RecordChange::Replace(fields) => {
                let mut line = join_fields(fields);
                line.push_str(LINE_ENDING);
                Some(line)
            }
            RecordChange::Delete => None,
        };

        let mut raw = Vec::new();
        let mut line_no = 0;
        let mut matched = 0;
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            line_no += 1;

            let text = String::from_utf8_lossy(&raw);
            let field = key_field(strip_line_ending(&text));
            let id = RecordId::parse_field(field)
                .map_err(|_| StoreError::invalid_key(path, line_no, field))?;

            if id != key {
                pending.write_all(&raw)?;
                if !raw.ends_with(b"\n") {
                    pending.write_all(LINE_ENDING.as_bytes())?;
                }
                continue;
            }

            matched += 1;
            if let Some(line) = &replacement {
                pending.write_all(line.as_bytes())?;
            }
        }
        drop(reader);

        if matched == 0 {
            debug!(path = %path.display(), %key, "no record matched, file unchanged");
            return Ok(0);
        }
        if matched > 1 {
            warn!(
                path = %path.display(),
                %key,
                matched,
                delete = change.is_delete(),
                "duplicate record keys, every matching line was changed"
            );
        }

        pending.commit()?;
        debug!(path = %path.display(), %key, delete = change.is_delete(), "rewrote record file");
        Ok(matched)
    }
}
