//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{PasswordReset, User};
use crate::error::AuthResult;
use kernel::id::UserId;
use uuid::Uuid;

/// User repository trait (the relational credential store)
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Find user by ID and email together (auth-gate lookup)
    async fn find_by_id_and_email(&self, user_id: &UserId, email: &str)
    -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &str) -> AuthResult<bool>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Password-reset repository trait
#[trait_variant::make(PasswordResetRepository: Send)]
pub trait LocalPasswordResetRepository {
    /// Create a reset record
    async fn create(&self, reset: &PasswordReset) -> AuthResult<()>;

    /// Find a reset record by its token
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<PasswordReset>>;

    /// Delete a consumed reset record
    async fn delete(&self, id: Uuid) -> AuthResult<()>;
}
