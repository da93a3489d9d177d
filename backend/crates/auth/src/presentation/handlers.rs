//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::identity::AuthIdentity;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    GetProfileUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    RequestPasswordResetUseCase, ResetPasswordInput, ResetPasswordUseCase, UpdateProfileInput,
    UpdateProfileUseCase,
};
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, MessageResponse, RegisterRequest, RequestPasswordResetRequest,
    ResetPasswordRequest, TokenResponse, UpdateProfileRequest, UserEnvelope, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: output.token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

// ============================================================================
// Password Reset
// ============================================================================

/// POST /auth/reset-password
pub async fn reset_password<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<ResetPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = ResetPasswordUseCase::new(state.repo.clone(), state.repo.clone());

    use_case
        .execute(ResetPasswordInput {
            token: req.token,
            new_password: req.new_password,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Password has been reset successfully.".to_string(),
    }))
}

/// POST /auth/request-password-reset
pub async fn request_password_reset<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RequestPasswordResetRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = RequestPasswordResetUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    use_case.execute(&req.email).await?;

    // Same message whether or not the email matched an account
    Ok(Json(MessageResponse {
        message: "If the email exists, a reset token has been sent.".to_string(),
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /users/profile
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    identity: AuthIdentity,
) -> AuthResult<Json<UserEnvelope>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let user = use_case.execute(&identity).await?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}

/// PUT /users/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    identity: AuthIdentity,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UserEnvelope>>
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let user = use_case
        .execute(
            &identity,
            UpdateProfileInput {
                name: req.name,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}
