//! Application Configuration
//!
//! Configuration for the Auth application layer. Constructed once at
//! startup and passed into routers; never read from globals.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify session tokens
    pub token_secret: Vec<u8>,
    /// Session token lifetime (default 1 hour)
    pub token_ttl: Duration,
    /// Password-reset token lifetime (default 1 hour)
    pub reset_token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(3600),
            reset_token_ttl: Duration::from_secs(3600),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }
}
