//! User model and credential rules
//!
//! Usernames and passwords are checked once, at registration time. Stored
//! credentials are never re-validated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum username length
pub const MIN_USERNAME_LEN: usize = 4;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name
    pub username: String,

    /// Stored credential: the plaintext password or an Argon2 PHC string
    pub password: String,
}

impl User {
    /// Create a new user
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Check a username against the registration rules
///
/// Length is measured in bytes.
pub fn validate_username(username: &str) -> Result<(), CredentialValidationError> {
    if username.len() < MIN_USERNAME_LEN {
        return Err(CredentialValidationError::UsernameTooShort);
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CredentialValidationError::UsernameNotAlphanumeric);
    }

    Ok(())
}

/// Check a password against the complexity policy
///
/// Length is measured in bytes, so multi-byte characters count more than once.
pub fn validate_password(password: &str) -> Result<(), CredentialValidationError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CredentialValidationError::PasswordTooShort);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(CredentialValidationError::PasswordMissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(CredentialValidationError::PasswordMissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CredentialValidationError::PasswordMissingDigit);
    }

    // users.txt is whitespace-delimited
    if password.chars().any(char::is_whitespace) {
        return Err(CredentialValidationError::PasswordContainsWhitespace);
    }

    Ok(())
}

/// Reasons a username or password is rejected at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialValidationError {
    UsernameTooShort,
    UsernameNotAlphanumeric,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    PasswordContainsWhitespace,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsernameTooShort => write!(
                f,
                "Username must be at least {} characters long",
                MIN_USERNAME_LEN
            ),
            Self::UsernameNotAlphanumeric => {
                write!(f, "Username can only contain alphanumeric characters")
            }
            Self::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            ),
            Self::PasswordMissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            Self::PasswordMissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            Self::PasswordMissingDigit => write!(f, "Password must contain at least one number"),
            Self::PasswordContainsWhitespace => write!(f, "Password cannot contain spaces"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice1").is_ok());
        assert!(validate_username("abcd").is_ok());
        assert_eq!(
            validate_username("abc"),
            Err(CredentialValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate_username("alice_1"),
            Err(CredentialValidationError::UsernameNotAlphanumeric)
        );
        assert_eq!(
            validate_username("al ice"),
            Err(CredentialValidationError::UsernameNotAlphanumeric)
        );
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Passw0rd").is_ok());
        assert_eq!(
            validate_password("weak"),
            Err(CredentialValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("password1"),
            Err(CredentialValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            validate_password("PASSWORD1"),
            Err(CredentialValidationError::PasswordMissingLowercase)
        );
        assert_eq!(
            validate_password("Password"),
            Err(CredentialValidationError::PasswordMissingDigit)
        );
        assert_eq!(
            validate_password("Pass w0rd"),
            Err(CredentialValidationError::PasswordContainsWhitespace)
        );
    }

    #[test]
    fn test_length_checked_before_character_classes() {
        // "weak" fails on length before the missing uppercase is reported
        assert_eq!(
            validate_password("weak").unwrap_err().to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_lengths_count_bytes() {
        // "Ab1ééé" is six characters but nine bytes
        assert_eq!(validate_password("Ab1ééé"), Ok(()));
        assert_eq!(
            validate_password("Ab1defg"),
            Err(CredentialValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_username("éé"),
            Err(CredentialValidationError::UsernameNotAlphanumeric)
        );
        assert_eq!(
            validate_username("abc"),
            Err(CredentialValidationError::UsernameTooShort)
        );
    }
}
