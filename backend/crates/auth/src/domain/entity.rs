//! Auth Entities
//!
//! The credential store's records: users and one-time password-reset
//! tokens.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

/// User entity
///
/// Identity plus hashed credential. Never hard-deleted.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    /// Unique across the store
    pub email: String,
    /// Argon2id PHC string; never serialized outward
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored credential
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Apply a profile update; absent fields are left untouched
    pub fn apply_profile_update(
        &mut self,
        name: Option<String>,
        email: Option<String>,
        password_hash: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
        self.updated_at = Utc::now();
    }
}

/// One-time password-reset token
///
/// Consumed (deleted) on successful reset; rejected once `expires_at`
/// has passed.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub id: Uuid,
    pub user_id: UserId,
    /// Opaque random token, unique across the store
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PasswordReset {
    /// Create a reset record with a fresh random token
    pub fn new(user_id: UserId, ttl: std::time::Duration) -> Self {
        let now = Utc::now();
        let ttl = Duration::from_std(ttl).unwrap_or_else(|_| Duration::hours(1));
        Self {
            id: Uuid::new_v4(),
            user_id,
            token: platform::crypto::generate_reset_token(),
            expires_at: now + ttl,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the token can no longer be redeemed
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}
