//! Profile Use Cases
//!
//! Read and update the authenticated user's own profile.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::identity::AuthIdentity;
use platform::password::{ClearTextPassword, hash_password};

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, identity: &AuthIdentity) -> AuthResult<User> {
        self.user_repo
            .find_by_id(&UserId::from_uuid(identity.user_id))
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// Update profile input; absent fields are left untouched
#[derive(Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        identity: &AuthIdentity,
        input: UpdateProfileInput,
    ) -> AuthResult<User> {
        let mut user = self
            .user_repo
            .find_by_id(&UserId::from_uuid(identity.user_id))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password_hash = match input.password {
            Some(raw) => Some(hash_password(&ClearTextPassword::new(raw))?),
            None => None,
        };

        user.apply_profile_update(input.name, input.email, password_hash);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
