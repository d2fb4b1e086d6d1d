//! Data directory facade.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::repository::{Employees, Repository, Users};
use planilla_store::{IdAllocator, RecordStore};
use std::fs;
use tracing::info;

/// An open data directory.
///
/// Holds one [`RecordStore`] and one [`IdAllocator`] shared by every table
/// in the directory.
///
/// # Example
///
/// ```rust,no_run
/// use planilla_core::{Config, Planilla, User};
/// use planilla_store::RecordId;
///
/// let planilla = Planilla::open(Config::new("data"))?;
/// let users = planilla.users();
///
/// let mut user = User {
///     id: RecordId::default(),
///     first_name: "Ana".into(),
///     first_surname: "Lopez".into(),
///     second_surname: "Mora".into(),
///     email: "ana@example.com".into(),
///     username: "ana".into(),
///     password: "secreto".into(),
/// };
/// users.add(&mut user)?;
/// assert!(users.authenticate("ana", "secreto")?.is_some());
/// # Ok::<(), planilla_core::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Planilla {
    config: Config,
    store: RecordStore,
    ids: IdAllocator,
}

impl Planilla {
    /// Opens the data directory described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory doesn't exist and `create_if_missing` is false
    /// - The path exists but is not a directory
    /// - The directory cannot be created
    pub fn open(config: Config) -> CoreResult<Self> {
        let dir = config.data_dir();
        if !dir.exists() {
            if config.create_if_missing {
                fs::create_dir_all(dir)?;
                info!(data_dir = %dir.display(), "created data directory");
            } else {
                return Err(CoreError::data_dir(dir, "does not exist"));
            }
        }
        if !dir.is_dir() {
            return Err(CoreError::data_dir(dir, "not a directory"));
        }

        let store = RecordStore::with_config(config.store.clone());
        let ids = IdAllocator::with_config(config.ledger_path(), config.store.clone());
        Ok(Self { config, store, ids })
    }

    /// Returns the configuration the directory was opened with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the shared record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the shared ID allocator.
    #[must_use]
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Returns the employee table.
    #[must_use]
    pub fn employees(&self) -> Employees {
        Repository::new(self.store.clone(), self.ids.clone(), self.config.employees_path())
    }

    /// Returns the user table.
    #[must_use]
    pub fn users(&self) -> Users {
        Repository::new(self.store.clone(), self.ids.clone(), self.config.users_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_directory() {
        let temp = tempdir().unwrap();
        let data = temp.path().join("data");

        Planilla::open(Config::new(&data)).unwrap();
        assert!(data.is_dir());
    }

    #[test]
    fn open_fails_if_missing_and_no_create() {
        let temp = tempdir().unwrap();
        let result = Planilla::open(Config::new(temp.path().join("nope")).create_if_missing(false));
        assert!(matches!(result, Err(CoreError::DataDir { .. })));
    }

    #[test]
    fn open_fails_on_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();

        let result = Planilla::open(Config::new(&file));
        assert!(matches!(result, Err(CoreError::DataDir { .. })));
    }

    #[test]
    fn repositories_use_configured_files() {
        let temp = tempdir().unwrap();
        let planilla = Planilla::open(Config::new(temp.path()).employees_file("staff.txt")).unwrap();

        assert_eq!(planilla.employees().path(), temp.path().join("staff.txt"));
        assert_eq!(planilla.employees().ledger_name(), "staff.txt");
        assert_eq!(planilla.users().ledger_name(), "usuarios.txt");
        assert_eq!(planilla.ids().path(), temp.path().join("idControl.txt"));
    }
}
