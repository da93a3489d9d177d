//! Request Password Reset Use Case
//!
//! Creates a one-time reset token for an email and hands it to the mailer.
//! Always succeeds outwardly: the response never reveals whether the email
//! belongs to an account.

use std::sync::Arc;

use platform::email::{EmailMessage, send_email};

use crate::application::config::AuthConfig;
use crate::domain::entity::PasswordReset;
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::error::AuthResult;

/// Request password reset use case
pub struct RequestPasswordResetUseCase<U, P>
where
    U: UserRepository,
    P: PasswordResetRepository,
{
    user_repo: Arc<U>,
    reset_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<U, P> RequestPasswordResetUseCase<U, P>
where
    U: UserRepository,
    P: PasswordResetRepository,
{
    pub fn new(user_repo: Arc<U>, reset_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            reset_repo,
            config,
        }
    }

    pub async fn execute(&self, email: &str) -> AuthResult<()> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let reset = PasswordReset::new(user.user_id, self.config.reset_token_ttl);
        self.reset_repo.create(&reset).await?;

        send_email(&EmailMessage {
            to: user.email.clone(),
            subject: "Password reset".to_string(),
            text: format!("Your password reset token: {}", reset.token),
        });

        tracing::info!(user_id = %user.user_id, "Password reset token issued");

        Ok(())
    }
}
