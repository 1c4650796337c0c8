//! Login session state
//!
//! `LoggedOut` -> `LoggedIn` on a successful login, `LoggedIn` -> `Ended`
//! on logout. `Ended` is terminal: there is no way back to the login menu
//! within one run.

use super::auth::AuthService;
use crate::error::TrackerResult;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(String),
    Ended,
}

/// The current user's session
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Start logged out
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Name of the logged-in user
    pub fn current_user(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn(user) => Some(user.as_str()),
            _ => None,
        }
    }

    /// Whether a user is logged in
    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    /// Whether the session has ended
    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    /// Attempt a login; only possible while logged out
    ///
    /// On success, later audit entries are attributed to the user.
    pub fn login(
        &mut self,
        auth: &AuthService<'_>,
        username: &str,
        password: &str,
    ) -> TrackerResult<bool> {
        if self.state != SessionState::LoggedOut {
            return Ok(false);
        }

        if !auth.authenticate(username, password)? {
            return Ok(false);
        }

        auth.storage().set_actor(Some(username.to_string()))?;
        self.state = SessionState::LoggedIn(username.to_string());
        tracing::info!(username, "logged in");
        Ok(true)
    }

    /// End the session; a no-op unless someone is logged in
    pub fn logout(&mut self) {
        if let SessionState::LoggedIn(user) = &self.state {
            tracing::info!(username = %user, "logged out");
            self.state = SessionState::Ended;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_failed_login_stays_logged_out() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        auth.register("alice1", "Passw0rd").unwrap();

        let mut session = Session::new();
        assert!(!session.login(&auth, "alice1", "wrong").unwrap());
        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_login_then_logout_is_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        auth.register("alice1", "Passw0rd").unwrap();

        let mut session = Session::new();
        assert!(session.login(&auth, "alice1", "Passw0rd").unwrap());
        assert_eq!(session.current_user(), Some("alice1"));

        session.logout();
        assert!(session.is_ended());
        assert!(!session.login(&auth, "alice1", "Passw0rd").unwrap());
        assert!(session.is_ended());
    }

    #[test]
    fn test_logout_while_logged_out_is_noop() {
        let mut session = Session::new();
        session.logout();
        assert_eq!(session.state(), &SessionState::LoggedOut);
    }
}
