//! Session Tokens
//!
//! Signed, time-limited bearer credentials carrying `{id, email}`.
//! HS256 via `jsonwebtoken`; the secret and lifetime come from the caller's
//! config. Verification is strict: no expiry leeway.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims encoded into a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub id: Uuid,
    /// User email at issue time
    pub email: String,
    /// Expiration (seconds since epoch)
    pub exp: i64,
}

/// Token verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token is malformed or the signature does not verify
    #[error("Invalid token")]
    Invalid,

    /// Token could not be signed
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Issue a signed session token for the given identity.
pub fn issue_token(
    secret: &[u8],
    lifetime: std::time::Duration,
    user_id: Uuid,
    email: &str,
) -> Result<String, TokenError> {
    let lifetime =
        Duration::from_std(lifetime).map_err(|e| TokenError::SigningFailed(e.to_string()))?;

    let claims = TokenClaims {
        id: user_id,
        email: email.to_string(),
        exp: (Utc::now() + lifetime).timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenError::SigningFailed(e.to_string()))
}

/// Verify a session token and return its claims.
pub fn verify_token(secret: &[u8], token: &str) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    const SECRET: &[u8] = b"test-secret-at-least-some-bytes";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(SECRET, StdDuration::from_secs(3600), user_id, "a@x.com").unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.id, user_id);
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token =
            issue_token(SECRET, StdDuration::from_secs(3600), Uuid::new_v4(), "a@x.com").unwrap();
        assert!(matches!(
            verify_token(b"another-secret", &token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(matches!(
            verify_token(SECRET, "not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let claims = TokenClaims {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            exp: (Utc::now() - Duration::minutes(5)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            verify_token(SECRET, &token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let token =
            issue_token(SECRET, StdDuration::from_secs(3600), Uuid::new_v4(), "a@x.com").unwrap();
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1] = parts[1].chars().rev().collect();
        let tampered = parts.join(".");

        assert!(verify_token(SECRET, &tampered).is_err());
    }
}
