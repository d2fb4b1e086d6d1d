//! Typed repositories over record files.

use crate::codec::RecordCodec;
use crate::employee::{Employee, PayrollType};
use crate::error::CoreResult;
use crate::user::User;
use planilla_store::{IdAllocator, RecordChange, RecordId, RecordStore};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// CRUD for one entity type stored in one table file.
///
/// New records get their key from the shared [`IdAllocator`], using the
/// table's file name as the ledger name. Listing decodes every row the
/// entity accepts and skips the rest with a warning; the raw rows remain
/// available through [`Repository::raw_rows`].
#[derive(Debug, Clone)]
pub struct Repository<T> {
    store: RecordStore,
    ids: IdAllocator,
    path: PathBuf,
    ledger_name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: RecordCodec> Repository<T> {
    /// Creates a repository over the table at `path`.
    pub fn new(store: RecordStore, ids: IdAllocator, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ledger_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            store,
            ids,
            path,
            ledger_name,
            _marker: PhantomData,
        }
    }

    /// Returns the table path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the name this table's IDs are issued under.
    #[must_use]
    pub fn ledger_name(&self) -> &str {
        &self.ledger_name
    }

    /// Stores a new entity, assigning it the next ID.
    ///
    /// The entity is validated before an ID is allocated, so a rejected
    /// entity does not consume one.
    pub fn add(&self, entity: &mut T) -> CoreResult<RecordId> {
        entity.validate()?;
        let id = self.ids.next_id(&self.ledger_name)?;
        entity.assign_id(id);
        self.store.append(&self.path, &entity.encode())?;
        debug!(table = %self.path.display(), %id, "added record");
        Ok(id)
    }

    /// Lists every row that decodes as `T`, in file order.
    pub fn list(&self) -> CoreResult<Vec<T>> {
        let rows = self.store.read_all(&self.path)?;
        let mut entities = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match T::decode_row(row) {
                Ok(entity) => entities.push(entity),
                Err(e) => warn!(
                    table = %self.path.display(),
                    line = index + 1,
                    error = %e,
                    "skipping row"
                ),
            }
        }
        Ok(entities)
    }

    /// Returns the first entity with `id`.
    pub fn get(&self, id: RecordId) -> CoreResult<Option<T>> {
        Ok(self.list()?.into_iter().find(|e| e.record_id() == id))
    }

    /// Replaces the stored row with the entity's current fields.
    ///
    /// Returns false if no row has the entity's ID.
    pub fn update(&self, entity: &T) -> CoreResult<bool> {
        entity.validate()?;
        let change = RecordChange::Replace(entity.encode());
        let matched = self
            .store
            .replace_or_delete(&self.path, entity.record_id(), &change)?;
        Ok(matched > 0)
    }

    /// Deletes every row with `id`.
    ///
    /// Returns false if no row had it.
    pub fn delete(&self, id: RecordId) -> CoreResult<bool> {
        let matched = self
            .store
            .replace_or_delete(&self.path, id, &RecordChange::Delete)?;
        Ok(matched > 0)
    }

    /// Returns every row as stored, including rows `T` rejects.
    pub fn raw_rows(&self) -> CoreResult<Vec<Vec<String>>> {
        Ok(self.store.read_all(&self.path)?)
    }
}

/// Employee table.
pub type Employees = Repository<Employee>;

/// User table.
pub type Users = Repository<User>;

impl Repository<Employee> {
    /// Lists employees paid with the given frequency.
    pub fn by_payroll_type(&self, payroll_type: PayrollType) -> CoreResult<Vec<Employee>> {
        let mut employees = self.list()?;
        employees.retain(|e| e.payroll_type == payroll_type);
        Ok(employees)
    }
}

impl Repository<User> {
    /// Finds the first valid user row whose credentials match exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> CoreResult<Option<User>> {
        let user = self
            .list()?
            .into_iter()
            .find(|u| u.matches_credentials(username, password));
        debug!(username, found = user.is_some(), "authentication lookup");
        Ok(user)
    }

    /// Finds the first valid user row with `username`.
    pub fn find_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        Ok(self.list()?.into_iter().find(|u| u.username == username))
    }
}
