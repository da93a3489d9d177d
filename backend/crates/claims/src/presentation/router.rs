//! Claim Routers
//!
//! None of these routers enforce authentication themselves; handlers that
//! need a caller pull [`kernel::identity::AuthIdentity`] from request
//! extensions, so the app composing them must layer the auth gate over
//! every router except [`repair_centres_public_router`].

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{ClaimRepository, FeedbackRepository, RepairCentreRepository};
use crate::presentation::handlers::{self, ClaimsAppState};

/// Create the claims router (`/claims/...`)
pub fn claims_router<S>(store: S) -> Router
where
    S: ClaimRepository + Clone + Send + Sync + 'static,
{
    let state = ClaimsAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/", post(handlers::create_claim::<S>))
        .route("/", get(handlers::list_claims::<S>))
        .route(
            "/{id}",
            put(handlers::update_claim::<S>).delete(handlers::cancel_claim::<S>),
        )
        .route("/{id}/appeal", post(handlers::appeal_claim::<S>))
        .with_state(state)
}

/// Create the feedback router (`/feedback/...`)
pub fn feedback_router<S>(store: S) -> Router
where
    S: ClaimRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = ClaimsAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/", post(handlers::submit_feedback::<S>))
        .route("/", get(handlers::list_feedback::<S>))
        .with_state(state)
}

/// Create the auth-gated part of the repair centre router
pub fn repair_centres_protected_router<S>(store: S) -> Router
where
    S: RepairCentreRepository + Clone + Send + Sync + 'static,
{
    let state = ClaimsAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/", post(handlers::create_repair_centre::<S>))
        .with_state(state)
}

/// Create the public part of the repair centre router
pub fn repair_centres_public_router<S>(store: S) -> Router
where
    S: RepairCentreRepository + Clone + Send + Sync + 'static,
{
    let state = ClaimsAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/nearby", get(handlers::nearby_repair_centres::<S>))
        .route("/{id}", get(handlers::get_repair_centre::<S>))
        .with_state(state)
}
