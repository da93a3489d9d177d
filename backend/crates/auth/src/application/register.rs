//! Register Use Case
//!
//! Creates a new user account and issues a session token.

use std::sync::Arc;

use platform::password::{ClearTextPassword, hash_password};
use platform::token::issue_token;

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if self.user_repo.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password);
        let password_hash = hash_password(&password)?;

        let user = User::new(input.name, input.email, password_hash);
        self.user_repo.create(&user).await?;

        let token = issue_token(
            &self.config.token_secret,
            self.config.token_ttl,
            user.user_id.into_uuid(),
            &user.email,
        )?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput { token })
    }
}
