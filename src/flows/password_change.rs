//! PasswordChangeFlow: authenticated credential rotation, no email.

use crate::{
    auth::{password, policy},
    flows::FlowError,
    retailer::repo::CredentialStore,
};
use tracing::info;
use uuid::Uuid;

/// Change the caller's password after verifying the current one.
///
/// The caller is already authenticated as the target identity, so a wrong
/// current password is a plain authorization failure — there is no
/// enumeration concern on this path.
///
/// # Errors
/// `Validation` for missing input, `Policy` for a weak new password,
/// `Authentication` for a wrong current password, `NotFound` when the
/// identity no longer maps to a row.
pub async fn run<S: CredentialStore>(
    store: &S,
    id: Uuid,
    current: &str,
    new: &str,
) -> Result<(), FlowError> {
    if current.is_empty() || new.is_empty() {
        return Err(FlowError::Validation(
            "Current password and new password are required".to_string(),
        ));
    }

    if !policy::meets_policy(new) {
        return Err(FlowError::Policy(policy::POLICY_MESSAGE.to_string()));
    }

    let Some(retailer) = store.find_by_id(id).await? else {
        return Err(FlowError::NotFound("Retailer not found".to_string()));
    };

    if !password::verify(current, &retailer.password_hash).await? {
        return Err(FlowError::Authentication(
            "Current password is incorrect".to_string(),
        ));
    }

    let password_hash = password::hash(new).await?;

    if !store.update_password(id, &password_hash).await? {
        return Err(FlowError::NotFound("Retailer not found".to_string()));
    }

    info!(retailer = %id, "password changed");

    Ok(())
}
