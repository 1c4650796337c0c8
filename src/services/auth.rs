//! Authentication service
//!
//! Registration and login against the credential store.

use serde_json::json;

use crate::audit::EntityType;
use crate::config::settings::PasswordStorage;
use crate::crypto::{hash_password, verify_password};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{validate_password, validate_username, User};
use crate::storage::Storage;

/// Service for user registration and authentication
pub struct AuthService<'a> {
    storage: &'a Storage,
    password_storage: PasswordStorage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service that stores plaintext credentials
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            password_storage: PasswordStorage::Plaintext,
        }
    }

    /// Choose how new passwords are stored
    pub fn with_password_storage(mut self, password_storage: PasswordStorage) -> Self {
        self.password_storage = password_storage;
        self
    }

    /// The storage this service works against
    pub fn storage(&self) -> &'a Storage {
        self.storage
    }

    /// Register a new user and persist the credential store
    ///
    /// Rules are checked in order: username shape, password policy, then
    /// uniqueness. The first failure is returned.
    pub fn register(&self, username: &str, password: &str) -> TrackerResult<User> {
        validate_username(username).map_err(|e| TrackerError::Validation(e.to_string()))?;
        validate_password(password).map_err(|e| TrackerError::Validation(e.to_string()))?;

        if self.storage.users.contains(username)? {
            return Err(TrackerError::user_exists(username));
        }

        let stored = match self.password_storage {
            PasswordStorage::Plaintext => password.to_string(),
            PasswordStorage::Argon2 => hash_password(password)?,
        };

        let user = User::new(username, stored);
        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        tracing::info!(username, "registered user");

        // Never write the credential to the audit log
        self.storage.log_create(
            EntityType::User,
            username,
            None,
            &json!({ "username": username }),
        )?;

        Ok(user)
    }

    /// Check a username/password pair
    pub fn authenticate(&self, username: &str, password: &str) -> TrackerResult<bool> {
        let Some(user) = self.storage.users.get(username)? else {
            return Ok(false);
        };

        let ok = verify_password(password, &user.password)?;
        if !ok {
            tracing::debug!(username, "authentication failed");
        }
        Ok(ok)
    }
}
