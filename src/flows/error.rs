//! Flow error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Terminal outcome of a failed flow. Every variant maps to one status code
/// and an `{ "error": <string> }` body; storage and internal failures keep
/// their detail server-side.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Policy(String),
    #[error("{0}")]
    Delivery(String),
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl FlowError {
    /// The one generic outcome for both unknown-email and wrong-password
    /// logins, so the two cases cannot be told apart.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::Authentication("Invalid email or password".to_string())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Duplicate(_) | Self::Policy(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Delivery(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Storage(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for FlowError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(err) => error!("storage failure: {err}"),
            Self::Internal(err) => error!("internal error: {err:?}"),
            Self::Delivery(msg) => error!("email delivery failed: {msg}"),
            _ => {}
        }

        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            FlowError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FlowError::Duplicate("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FlowError::Policy("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FlowError::Authentication("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            FlowError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            FlowError::Delivery("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let err = FlowError::Internal(anyhow::anyhow!("secret detail"));
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_invalid_credentials_is_uniform() {
        let unknown_email = FlowError::invalid_credentials();
        let wrong_password = FlowError::invalid_credentials();
        assert_eq!(unknown_email.status(), wrong_password.status());
        assert_eq!(
            unknown_email.public_message(),
            wrong_password.public_message()
        );
        assert_eq!(unknown_email.to_string(), "Invalid email or password");
    }
}
