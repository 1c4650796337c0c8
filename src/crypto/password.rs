//! Password hashing using Argon2id
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), which contain no
//! whitespace and therefore fit in the users.txt line format.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{TrackerError, TrackerResult};

/// Prefix shared by every Argon2 PHC string
pub const ARGON2_PREFIX: &str = "$argon2";

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> TrackerResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| TrackerError::Credential(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored credential
///
/// Credentials starting with `$argon2` are verified as hashes; anything else
/// is compared as plaintext.
pub fn verify_password(password: &str, stored: &str) -> TrackerResult<bool> {
    if !stored.starts_with(ARGON2_PREFIX) {
        return Ok(stored == password);
    }

    let parsed = PasswordHash::new(stored)
        .map_err(|e| TrackerError::Credential(format!("Invalid stored hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Passw0rd").unwrap();
        assert!(hash.starts_with(ARGON2_PREFIX));
        assert!(!hash.contains(char::is_whitespace));

        assert!(verify_password("Passw0rd", &hash).unwrap());
        assert!(!verify_password("passw0rd", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_salt() {
        let h1 = hash_password("Passw0rd").unwrap();
        let h2 = hash_password("Passw0rd").unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_plaintext_compare_is_exact() {
        assert!(verify_password("Passw0rd", "Passw0rd").unwrap());
        assert!(!verify_password("Passw0rd ", "Passw0rd").unwrap());
        assert!(!verify_password("passw0rd", "Passw0rd").unwrap());
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        let err = verify_password("Passw0rd", "$argon2id$garbage").unwrap_err();
        assert!(matches!(err, TrackerError::Credential(_)));
    }
}
