//! User repository for text-file storage
//!
//! Manages loading and saving credentials to users.txt, one
//! `username password` pair per line.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::TrackerError;
use crate::models::User;

use super::file_io::{read_lines, write_lines_atomic};

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, User>>, TrackerError> {
        self.data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, User>>, TrackerError> {
        self.data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load users from disk
    ///
    /// Lines that don't have exactly two fields are skipped.
    pub fn load(&self) -> Result<(), TrackerError> {
        let lines = read_lines(&self.path)?;
        let mut data = self.write()?;
        data.clear();

        for (line_num, line) in lines.iter().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [username, password] => {
                    data.insert(username.to_string(), User::new(*username, *password));
                }
                _ => {
                    tracing::debug!(
                        path = %self.path.display(),
                        line = line_num + 1,
                        "skipping malformed user record"
                    );
                }
            }
        }

        tracing::debug!(count = data.len(), "loaded users");
        Ok(())
    }

    /// Save users to disk, sorted by username
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.read()?;

        let mut users: Vec<_> = data.values().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));

        write_lines_atomic(
            &self.path,
            users
                .iter()
                .map(|u| format!("{} {}", u.username, u.password)),
        )
    }

    /// Get a user by exact username
    pub fn get(&self, username: &str) -> Result<Option<User>, TrackerError> {
        Ok(self.read()?.get(username).cloned())
    }

    /// Check whether a username is taken
    pub fn contains(&self, username: &str) -> Result<bool, TrackerError> {
        Ok(self.read()?.contains_key(username))
    }

    /// Insert or replace a user
    pub fn upsert(&self, user: User) -> Result<(), TrackerError> {
        self.write()?.insert(user.username.clone(), user);
        Ok(())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.len())
    }
}
