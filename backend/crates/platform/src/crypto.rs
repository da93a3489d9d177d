//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate an opaque one-time token: 32 random bytes, hex-encoded.
///
/// Used for password-reset tokens; uniqueness is enforced by the store.
pub fn generate_reset_token() -> String {
    hex::encode(random_bytes(32))
}
