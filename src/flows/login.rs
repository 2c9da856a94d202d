//! LoginFlow: email + password in, bearer token + profile projection out.

use crate::{
    auth::{password, token},
    flows::{validate, FlowError},
    retailer::{models::Retailer, repo::CredentialStore},
};
use tracing::debug;

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub retailer: Retailer,
}

/// Authenticate a retailer by email and password.
///
/// An unknown email and a wrong password return the exact same
/// [`FlowError::invalid_credentials`] outcome so callers cannot probe which
/// emails are registered.
///
/// # Errors
/// `Validation` for malformed input, `Authentication` for bad credentials.
pub async fn run<S: CredentialStore>(
    store: &S,
    secret: &str,
    ttl_days: i64,
    email: &str,
    plain: &str,
) -> Result<LoginOutput, FlowError> {
    if !validate::valid_email(email) {
        return Err(FlowError::Validation("Valid email is required".to_string()));
    }
    if plain.is_empty() {
        return Err(FlowError::Validation("Password is required".to_string()));
    }

    let Some(retailer) = store.find_by_email(email).await? else {
        debug!("login attempt for unknown email");
        return Err(FlowError::invalid_credentials());
    };

    if !password::verify(plain, &retailer.password_hash).await? {
        debug!(retailer = %retailer.id, "login attempt with wrong password");
        return Err(FlowError::invalid_credentials());
    }

    let token = token::issue(retailer.id, &retailer.email, secret, ttl_days)?;

    Ok(LoginOutput { token, retailer })
}
