//! Bearer token issuance and verification (HS256 JWT).
//!
//! The signing secret is process-wide configuration supplied at startup.
//! Verification never raises: a malformed token, a bad signature and an
//! expired claim all collapse to `None`, which callers treat as
//! unauthenticated.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime when no override is configured.
pub const DEFAULT_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Retailer id.
    pub sub: String,
    /// Retailer email at issuance time.
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// The subject as a retailer id, if it still parses as one.
    #[must_use]
    pub fn retailer_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Issue a signed token bound to `{id, email}`.
///
/// # Errors
/// Returns an error if signing fails.
pub fn issue(id: Uuid, email: &str, secret: &str, ttl_days: i64) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: id.to_string(),
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::days(ttl_days)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("failed to sign token")
}

/// Verify a token and return its claims, or `None` for anything that is not a
/// valid, unexpired token signed with `secret`.
#[must_use]
pub fn verify(token: &str, secret: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let id = Uuid::new_v4();
        let token = issue(id, "retailer@example.com", SECRET, DEFAULT_TTL_DAYS).unwrap();

        let claims = verify(&token, SECRET).expect("token should verify");
        assert_eq!(claims.retailer_id(), Some(id));
        assert_eq!(claims.email, "retailer@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = issue(Uuid::new_v4(), "retailer@example.com", SECRET, 7).unwrap();
        assert!(verify(&token, "another-secret").is_none());
    }

    #[test]
    fn test_verify_malformed() {
        assert!(verify("not-a-token", SECRET).is_none());
        assert!(verify("", SECRET).is_none());
        assert!(verify("a.b.c", SECRET).is_none());
    }

    #[test]
    fn test_verify_expired() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "retailer@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(verify(&token, SECRET).is_none());
    }
}
