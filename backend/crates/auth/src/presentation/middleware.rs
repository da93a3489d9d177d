//! Auth Gate Middleware
//!
//! Resolves a bearer credential to an authenticated identity on every
//! protected request. No caching: each request re-verifies the token and
//! re-queries the credential store (by id AND email, so a token outlives
//! neither the account nor an email change).

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::header::AUTHORIZATION;
use kernel::id::UserId;
use kernel::identity::AuthIdentity;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token
///
/// On success the resolved [`AuthIdentity`] is inserted into request
/// extensions for downstream extractors.
pub async fn require_auth<R>(
    state: AuthGateState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = bearer else {
        return Err(AuthError::NoToken.into_response());
    };

    let claims = platform::token::verify_token(&state.config.token_secret, token)
        .map_err(|_| AuthError::InvalidToken.into_response())?;

    // Look up by both fields; id alone is not enough
    let user = state
        .repo
        .find_by_id_and_email(&UserId::from_uuid(claims.id), &claims.email)
        .await
        .map_err(IntoResponse::into_response)?;

    let Some(user) = user else {
        return Err(AuthError::TokenUserNotFound.into_response());
    };

    req.extensions_mut().insert(AuthIdentity {
        user_id: user.user_id.into_uuid(),
        email: user.email,
    });

    Ok(next.run(req).await)
}
