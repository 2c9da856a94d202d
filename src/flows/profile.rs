//! ProfileUpdateFlow: partial-update semantics over the allow-listed patch.

use crate::{
    flows::FlowError,
    retailer::{
        models::{Retailer, RetailerPatch},
        repo::CredentialStore,
    },
};
use uuid::Uuid;

/// Apply the provided non-blank fields to the caller's profile and return the
/// post-update record.
///
/// Blank or absent fields leave stored values untouched; `updated_at` is
/// refreshed even when the normalized patch is empty.
///
/// # Errors
/// `NotFound` if the authenticated identity no longer maps to a row.
pub async fn run<S: CredentialStore>(
    store: &S,
    id: Uuid,
    patch: RetailerPatch,
) -> Result<Retailer, FlowError> {
    let patch = patch.normalized();

    match store.apply_patch(id, &patch).await? {
        Some(retailer) => Ok(retailer),
        None => Err(FlowError::NotFound("Retailer not found".to_string())),
    }
}
