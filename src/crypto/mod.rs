//! Credential protection for the expense tracker
//!
//! Provides optional Argon2id hashing for stored passwords. Plaintext
//! credentials written by older versions remain readable.

pub mod password;

pub use password::{hash_password, verify_password, ARGON2_PREFIX};
