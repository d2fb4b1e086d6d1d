//! Write-temp-then-rename file replacement.
//!
//! A [`PendingFile`] collects the new contents of a file next to it and
//! swaps it over the original in a single rename. The original is never
//! deleted first, so the only failure window left is a crash between the
//! temp write and the rename, which leaves the original intact and a stale
//! temp file beside it.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult, SwapStage};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix of the advisory lock file kept beside a ledger.
pub(crate) const LOCK_SUFFIX: &str = ".lock";

/// Returns `target` with `suffix` appended to its file name.
fn sibling_path(target: &Path, suffix: &str) -> io::Result<PathBuf> {
    let name = target.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", target.display()),
        )
    })?;
    let mut sibling = OsString::from(name);
    sibling.push(suffix);
    Ok(target.with_file_name(sibling))
}

/// Returns the temp path used when rewriting `target`.
///
/// The suffix must name a file distinct from the target and from its lock
/// file, since the temp file is truncated on create and removed on abort.
pub(crate) fn temp_path(target: &Path, suffix: &str) -> io::Result<PathBuf> {
    if suffix.is_empty() || suffix == LOCK_SUFFIX {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unusable temp suffix {suffix:?}"),
        ));
    }
    sibling_path(target, suffix)
}

/// Returns the advisory lock path for `target`.
pub(crate) fn lock_path(target: &Path) -> io::Result<PathBuf> {
    sibling_path(target, LOCK_SUFFIX)
}

/// A rewrite of `target` in progress.
///
/// Dropping it without calling [`PendingFile::commit`] removes the temp file
/// and leaves the original untouched.
#[derive(Debug)]
pub(crate) struct PendingFile {
    target: PathBuf,
    temp: PathBuf,
    writer: Option<BufWriter<File>>,
    sync: bool,
    armed: bool,
}

impl PendingFile {
    /// Creates (or truncates a stale) temp file beside `target`.
    pub(crate) fn create(target: &Path, config: &StoreConfig) -> StoreResult<Self> {
        let temp = temp_path(target, &config.temp_suffix)?;
        let file = File::create(&temp)?;
        Ok(Self {
            target: target.to_path_buf(),
            temp,
            writer: Some(BufWriter::new(file)),
            sync: config.sync_on_write,
            armed: true,
        })
    }

    /// Flushes the temp file and renames it over the target.
    ///
    /// A failure at the rename or directory sync step is reported as
    /// [`StoreError::Replace`]; the temp file is then left in place for
    /// inspection.
    pub(crate) fn commit(mut self) -> StoreResult<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
            if self.sync {
                file.sync_all()?;
            }
        }

        self.armed = false;
        fs::rename(&self.temp, &self.target)
            .map_err(|e| StoreError::replace(&self.target, SwapStage::Rename, e))?;

        if self.sync {
            sync_parent_dir(&self.target)
                .map_err(|e| StoreError::replace(&self.target, SwapStage::SyncDirectory, e))?;
        }
        Ok(())
    }
}

impl Write for PendingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.writer.as_mut() {
            Some(writer) => writer.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "pending file closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if self.armed {
            self.writer.take();
            let _ = fs::remove_file(&self.temp);
        }
    }
}

/// Syncs the directory holding `path` so a rename is durable.
#[cfg(unix)]
pub(crate) fn sync_parent_dir(path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()
}

/// Directory fsync is not available on this platform; the filesystem journal
/// covers rename durability.
#[cfg(not(unix))]
pub(crate) fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
