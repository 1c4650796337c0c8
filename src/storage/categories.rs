//! Category repository
//!
//! Categories have no file of their own. The set is rebuilt from the
//! loaded expenses at startup and then changed in memory only.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::TrackerError;
use crate::models::CategorySet;

/// In-memory repository for category labels
#[derive(Default)]
pub struct CategoryRepository {
    data: RwLock<CategorySet>,
}

impl CategoryRepository {
    /// Create an empty category repository
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CategorySet>, TrackerError> {
        self.data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CategorySet>, TrackerError> {
        self.data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Replace the set with the given labels
    pub fn seed<I, S>(&self, names: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.write()? = names.into_iter().collect();
        Ok(())
    }

    /// Insert a label; returns true if it was new
    pub fn insert(&self, name: &str) -> Result<bool, TrackerError> {
        Ok(self.write()?.add(name))
    }

    /// Remove a label; returns true if it was present
    pub fn remove(&self, name: &str) -> Result<bool, TrackerError> {
        Ok(self.write()?.delete(name))
    }

    /// Whether a label is known
    pub fn contains(&self, name: &str) -> Result<bool, TrackerError> {
        Ok(self.read()?.contains(name))
    }

    /// All labels, sorted
    pub fn get_all(&self) -> Result<Vec<String>, TrackerError> {
        Ok(self.read()?.list())
    }

    /// Count labels
    pub fn count(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.len())
    }
}
