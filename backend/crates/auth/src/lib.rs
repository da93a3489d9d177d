//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User and password-reset entities, repository traits
//! - `application/` - Use cases (register, login, reset, profile)
//! - `infra/` - PostgreSQL implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth-gate middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Signed, time-limited bearer tokens carrying `{id, email}`
//! - One-time password-reset tokens (1 hour expiry)
//! - Auth gate resolving every bearer token against a live user row
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Login failures collapse to one message (no email-existence oracle)
//! - Token verification re-queries the credential store on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGateState, require_auth};
pub use presentation::router::{auth_router, users_router};
