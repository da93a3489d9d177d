//! Claim management: claim lifecycle, feedback and repair centre lookup.
//!
//! The crate follows the same layering as the other feature crates:
//!
//! - `domain`: entities, guard helpers and repository traits
//! - `application`: one use case per operation
//! - `infra`: Postgres implementations of the repositories
//! - `presentation`: DTOs, handlers and routers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

pub use error::{ClaimsError, ClaimsResult};
pub use infra::postgres::PgClaimsStore;
pub use presentation::router::{
    claims_router, feedback_router, repair_centres_protected_router, repair_centres_public_router,
};
