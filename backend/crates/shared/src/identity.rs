//! Authenticated Identity
//!
//! The `{id, email}` pair resolved by the auth gate and attached to the
//! request. Handlers take it as an extractor; a request that reaches a
//! protected handler without one is rejected with 401.

use uuid::Uuid;

/// Identity resolved from a verified bearer token and a live user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    pub user_id: Uuid,
    pub email: String,
}

#[cfg(feature = "axum")]
mod extract {
    use super::AuthIdentity;
    use crate::error::app_error::AppError;
    use axum::extract::FromRequestParts;
    use axum::http::request::Parts;

    impl<S> FromRequestParts<S> for AuthIdentity
    where
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            parts
                .extensions
                .get::<AuthIdentity>()
                .cloned()
                .ok_or_else(|| AppError::unauthorized("Unauthorized."))
        }
    }
}
