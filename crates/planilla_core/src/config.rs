//! Data directory configuration.

use planilla_store::StoreConfig;
use std::path::{Path, PathBuf};

/// Default employee table file name.
pub const EMPLOYEES_FILE: &str = "empleados.txt";

/// Default user table file name.
pub const USERS_FILE: &str = "usuarios.txt";

/// Default ID ledger file name.
pub const LEDGER_FILE: &str = "idControl.txt";

/// Configuration for opening a data directory.
///
/// The default file names match the files existing installations already
/// hold, so an old data directory opens as-is.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the tables and the ledger.
    pub data_dir: PathBuf,

    /// Whether to create the data directory if it doesn't exist.
    pub create_if_missing: bool,

    /// Employee table file name.
    pub employees_file: String,

    /// User table file name.
    pub users_file: String,

    /// ID ledger file name.
    pub ledger_file: String,

    /// Record store and allocator settings.
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            create_if_missing: true,
            employees_file: EMPLOYEES_FILE.to_string(),
            users_file: USERS_FILE.to_string(),
            ledger_file: LEDGER_FILE.to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Creates a configuration for `data_dir` with default values.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Sets whether to create the data directory if missing.
    #[must_use]
    pub fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    /// Sets the employee table file name.
    #[must_use]
    pub fn employees_file(mut self, name: impl Into<String>) -> Self {
        self.employees_file = name.into();
        self
    }

    /// Sets the user table file name.
    #[must_use]
    pub fn users_file(mut self, name: impl Into<String>) -> Self {
        self.users_file = name.into();
        self
    }

    /// Sets the ledger file name.
    #[must_use]
    pub fn ledger_file(mut self, name: impl Into<String>) -> Self {
        self.ledger_file = name.into();
        self
    }

    /// Sets the store configuration.
    #[must_use]
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Returns the path of the employee table.
    #[must_use]
    pub fn employees_path(&self) -> PathBuf {
        self.data_dir.join(&self.employees_file)
    }

    /// Returns the path of the user table.
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    /// Returns the path of the ledger.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(&self.ledger_file)
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names() {
        let config = Config::new("data");
        assert!(config.create_if_missing);
        assert_eq!(config.employees_path(), Path::new("data").join("empleados.txt"));
        assert_eq!(config.users_path(), Path::new("data").join("usuarios.txt"));
        assert_eq!(config.ledger_path(), Path::new("data").join("idControl.txt"));
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new("d")
            .create_if_missing(false)
            .employees_file("staff.csv")
            .ledger_file("ids.txt")
            .store(StoreConfig::new().advisory_lock(true));

        assert!(!config.create_if_missing);
        assert_eq!(config.employees_path(), Path::new("d").join("staff.csv"));
        assert_eq!(config.ledger_path(), Path::new("d").join("ids.txt"));
        assert!(config.store.advisory_lock);
    }
}
