//! Login Use Case
//!
//! Authenticates with email + password and issues a session token.
//! Unknown email and wrong password take different paths but surface the
//! same `InvalidCredentials` error, so callers cannot probe for accounts.

use std::sync::Arc;

use platform::password::{ClearTextPassword, verify_password};
use platform::token::issue_token;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password);
        let valid = verify_password(&password, &user.password_hash)?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(
            &self.config.token_secret,
            self.config.token_ttl,
            user.user_id.into_uuid(),
            &user.email,
        )?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token })
    }
}
