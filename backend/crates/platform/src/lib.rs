//! Platform - cross-cutting technical services
//!
//! Infrastructure-flavored building blocks with no domain knowledge:
//! - `password`: Unicode normalization and Argon2id hashing
//! - `token`: signed, time-limited session tokens
//! - `crypto`: random secrets (password-reset tokens)
//! - `email`: outbound mail (stub; logs instead of sending)

pub mod crypto;
pub mod email;
pub mod password;
pub mod token;
