//! Auth Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_auth};

/// Create the public auth router (`/auth/...`)
pub fn auth_router<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/reset-password", post(handlers::reset_password::<R>))
        .route(
            "/request-password-reset",
            post(handlers::request_password_reset::<R>),
        )
        .with_state(state)
}

/// Create the protected users router (`/users/...`)
pub fn users_router<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + PasswordResetRepository + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let state = AuthAppState {
        repo: repo.clone(),
        config: config.clone(),
    };
    let gate = AuthGateState { repo, config };

    Router::new()
        .route("/profile", get(handlers::get_profile::<R>))
        .route("/profile", put(handlers::update_profile::<R>))
        .layer(middleware::from_fn(move |req, next| {
            require_auth(gate.clone(), req, next)
        }))
        .with_state(state)
}
