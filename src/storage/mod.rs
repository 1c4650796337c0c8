//! Storage layer for the expense tracker
//!
//! Provides line-oriented text file storage with atomic writes and
//! automatic directory creation, plus the audit hooks used by services.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod users;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_lines, write_lines_atomic};
pub use users::UserRepository;

use std::sync::RwLock;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub users: UserRepository,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
    audit: Option<AuditLogger>,
    actor: RwLock<Option<String>>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(),
            audit: Some(AuditLogger::new(paths.audit_log())),
            actor: RwLock::new(None),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk and rebuild the category set
    pub fn load_all(&self) -> Result<(), TrackerError> {
        self.users.load()?;
        self.expenses.load()?;
        self.categories.seed(self.expenses.categories()?)?;
        Ok(())
    }

    /// Record who subsequent audit entries are attributed to
    pub fn set_actor(&self, actor: Option<String>) -> TrackerResult<()> {
        let mut guard = self
            .actor
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *guard = actor;
        Ok(())
    }

    fn current_actor(&self) -> Option<String> {
        self.actor.read().ok().and_then(|a| a.clone())
    }

    /// Log a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        self.log_entries(vec![AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        )])
    }

    /// Log a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        self.log_entries(vec![AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        )])
    }

    /// Log several entries at once, attributing them to the current actor
    pub fn log_entries(&self, entries: Vec<AuditEntry>) -> TrackerResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let actor = self.current_actor();
        let entries: Vec<_> = entries
            .into_iter()
            .map(|e| e.with_actor(actor.clone()))
            .collect();
        logger.log_batch(&entries)
    }
}
