//! Reset Password Use Case
//!
//! Redeems a one-time reset token: replaces the stored credential and
//! deletes the consumed record.

use std::sync::Arc;

use platform::password::{ClearTextPassword, hash_password};

use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Reset password input
pub struct ResetPasswordInput {
    pub token: String,
    pub new_password: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<U, P>
where
    U: UserRepository,
    P: PasswordResetRepository,
{
    user_repo: Arc<U>,
    reset_repo: Arc<P>,
}

impl<U, P> ResetPasswordUseCase<U, P>
where
    U: UserRepository,
    P: PasswordResetRepository,
{
    pub fn new(user_repo: Arc<U>, reset_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            reset_repo,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<()> {
        let reset = self
            .reset_repo
            .find_by_token(&input.token)
            .await?
            .filter(|r| !r.is_expired())
            .ok_or(AuthError::ResetTokenInvalid)?;

        let mut user = self
            .user_repo
            .find_by_id(&reset.user_id)
            .await?
            .ok_or(AuthError::ResetTokenUserMissing)?;

        let password = ClearTextPassword::new(input.new_password);
        user.set_password_hash(hash_password(&password)?);
        self.user_repo.update(&user).await?;

        // Single use: consume the record
        self.reset_repo.delete(reset.id).await?;

        tracing::info!(user_id = %user.user_id, "Password reset");

        Ok(())
    }
}
