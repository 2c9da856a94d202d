pub mod change_password;
pub mod forgot_password;
pub mod health;
pub mod login;
pub mod profile;
pub mod register;

// common functions for the handlers
use crate::{auth::token, cli::globals::GlobalArgs, flows::FlowError};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use secrecy::ExposeSecret;
use tracing::debug;
use uuid::Uuid;

/// Resolve the caller's identity from the `Authorization` header before any
/// flow logic runs. Every failure collapses to a single 401 outcome.
pub fn require_auth(headers: &HeaderMap, globals: &GlobalArgs) -> Result<Uuid, FlowError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let token = header.strip_prefix("Bearer ").unwrap_or(header);
    if token.is_empty() {
        return Err(FlowError::Authentication(
            "Access denied. No token provided.".to_string(),
        ));
    }

    let Some(claims) = token::verify(token, globals.jwt_secret.expose_secret()) else {
        debug!("rejected bearer token");
        return Err(FlowError::Authentication(
            "Invalid or expired token".to_string(),
        ));
    };

    claims.retailer_id().ok_or_else(|| {
        debug!("token subject is not a valid id");
        FlowError::Authentication("Invalid or expired token".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use secrecy::SecretString;

    fn globals() -> GlobalArgs {
        GlobalArgs::new(SecretString::from("handler-test-secret"))
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_require_auth_missing_header() {
        let err = require_auth(&HeaderMap::new(), &globals()).unwrap_err();
        assert_eq!(err.to_string(), "Access denied. No token provided.");
    }

    #[test]
    fn test_require_auth_garbage_token() {
        let err = require_auth(&bearer("not-a-token"), &globals()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_require_auth_wrong_secret() {
        let token = token::issue(Uuid::new_v4(), "alice@x.com", "another-secret", 7).unwrap();
        let err = require_auth(&bearer(&token), &globals()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_require_auth_valid_token() {
        let id = Uuid::new_v4();
        let token = token::issue(id, "alice@x.com", "handler-test-secret", 7).unwrap();
        assert_eq!(require_auth(&bearer(&token), &globals()).unwrap(), id);
    }
}
