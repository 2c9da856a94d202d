//! PasswordResetFlow ("forgot password"): rotate the credential and mail the
//! new plaintext to the account's address.

use crate::{
    auth::password,
    email::{self, EmailSender},
    flows::{validate, FlowError},
};
use crate::retailer::repo::CredentialStore;
use tracing::{error, info};

/// Reset the password for `email_addr` and deliver the replacement.
///
/// The new hash is persisted **before** the email goes out — the inverse of
/// registration's ordering. A failed send therefore leaves the rotated
/// credential in place; the old password is already gone. The asymmetry is
/// preserved as observed behavior and flagged in DESIGN.md rather than
/// silently reordered.
///
/// The 404 for unknown emails deliberately reveals account existence; see
/// DESIGN.md for the hardening alternative that was not adopted.
///
/// # Errors
/// `Validation` for a blank email, `NotFound` for an unknown one, `Delivery`
/// when the gateway fails after the credential was rotated.
pub async fn run<S: CredentialStore>(
    store: &S,
    mailer: &dyn EmailSender,
    email_addr: &str,
) -> Result<(), FlowError> {
    if validate::blank(email_addr) {
        return Err(FlowError::Validation("Email is required".to_string()));
    }

    let Some(retailer) = store.find_by_email(email_addr.trim()).await? else {
        return Err(FlowError::NotFound(
            "No retailer found with this email".to_string(),
        ));
    };

    let plain = password::generate();
    let password_hash = password::hash(&plain).await?;

    if !store.update_password(retailer.id, &password_hash).await? {
        return Err(FlowError::NotFound(
            "No retailer found with this email".to_string(),
        ));
    }

    info!(retailer = %retailer.id, "password reset persisted");

    let message =
        email::password_reset(&retailer.email, &retailer.first_name, &retailer.last_name, &plain);
    if let Err(err) = mailer.send(&message) {
        error!("password reset email failed: {err:?}");
        return Err(FlowError::Delivery("Failed to reset password".to_string()));
    }

    Ok(())
}
