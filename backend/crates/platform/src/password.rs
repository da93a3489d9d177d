//! Password Hashing and Verification
//!
//! Argon2id (memory-hard, recommended by OWASP) with zeroization of the
//! clear text. Hashing is one-way and salted; verification re-derives from
//! the stored PHC string, so callers never see salts or parameters.
//!
//! No strength policy is applied here: the credential store accepts
//! whatever the caller registered with.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Clear text password with automatic memory zeroization
///
/// Unicode is NFKC normalized on construction so visually identical inputs
/// hash identically. Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a raw password, normalizing and zeroizing the input.
    pub fn new(raw: String) -> Self {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    /// Access the normalized password bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClearTextPassword(***)")
    }
}

/// Hash a password with Argon2id, returning a PHC-format string.
pub fn hash_password(password: &ClearTextPassword) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash itself
/// is unreadable.
pub fn verify_password(
    password: &ClearTextPassword,
    stored_hash: &str,
) -> Result<bool, PasswordHashError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = ClearTextPassword::new("correct horse battery".to_string());
        let hash = hash_password(&password).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(&password, &hash).unwrap());

        let wrong = ClearTextPassword::new("incorrect horse".to_string());
        assert!(!verify_password(&wrong, &hash).unwrap());
    }

    #[test]
    fn test_short_passwords_are_accepted() {
        // The store imposes no strength policy
        let password = ClearTextPassword::new("p".to_string());
        let hash = hash_password(&password).unwrap();
        assert!(verify_password(&password, &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new("same password".to_string());
        let h1 = hash_password(&password).unwrap();
        let h2 = hash_password(&password).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let password = ClearTextPassword::new("some password".to_string());
        assert!(matches!(
            verify_password(&password, "not-a-phc-string"),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_nfkc_normalization() {
        // U+2460 CIRCLED DIGIT ONE normalizes to "1" under NFKC
        let a = ClearTextPassword::new("password\u{2460}".to_string());
        let b = ClearTextPassword::new("password1".to_string());
        let hash = hash_password(&a).unwrap();
        assert!(verify_password(&b, &hash).unwrap());
    }
}
