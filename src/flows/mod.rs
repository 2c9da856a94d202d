//! The five credential-lifecycle orchestrators.
//!
//! Each flow processes one request end-to-end against the Credential Store
//! and the Email Gateway; flows hold no state between invocations and never
//! retry — a failed send or write is terminal for that request and the caller
//! re-invokes the endpoint.

pub mod error;
pub mod login;
pub mod password_change;
pub mod password_reset;
pub mod profile;
pub mod register;
pub mod validate;

pub use error::FlowError;
