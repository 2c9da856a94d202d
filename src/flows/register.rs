//! RegistrationFlow: `Validating → CheckingDuplicate → GeneratingCredential →
//! DeliveringEmail → Persisting → Done`. Each step is a commit point; work
//! done before a failing step is not undone.

use crate::{
    auth::password,
    email::{self, EmailSender},
    flows::{validate, FlowError},
    retailer::{models::NewRetailer, repo::CredentialStore},
};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// References already resolved by the upload collaborator, if any.
    pub company_logo: Option<String>,
    pub profile_image: Option<String>,
}

/// Register a retailer and mail them their generated password.
///
/// The account-details email goes out **before** the row is inserted: the
/// plaintext is dropped right after delivery and cannot be re-sent, so an
/// account whose credential never arrived must not exist. The two steps are
/// not transactional — a crash between them leaves the applicant holding a
/// password for an account that does not exist, and they register again.
///
/// # Errors
/// `Validation` and `Duplicate` fail before any side effect; `Delivery` means
/// no record was created.
pub async fn run<S: CredentialStore>(
    store: &S,
    mailer: &dyn EmailSender,
    input: RegisterInput,
) -> Result<Uuid, FlowError> {
    // Validating
    validate_input(&input)?;

    // CheckingDuplicate
    if store.find_by_email(&input.email).await?.is_some() {
        return Err(FlowError::Duplicate("Email already registered".to_string()));
    }

    // GeneratingCredential
    let plain = password::generate();
    let password_hash = password::hash(&plain).await?;
    let id = Uuid::new_v4();

    // DeliveringEmail
    let message = email::account_details(&input.email, &input.first_name, &input.last_name, &plain);
    if let Err(err) = mailer.send(&message) {
        error!("account details email failed: {err:?}");
        return Err(FlowError::Delivery(
            "Failed to send email. Please check your email configuration.".to_string(),
        ));
    }

    // Persisting
    store
        .insert(NewRetailer {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            company_name: input.company_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            company_logo: input.company_logo,
            profile_image: input.profile_image,
            password_hash,
        })
        .await?;

    info!(retailer = %id, "retailer registered");

    Ok(id)
}

fn validate_input(input: &RegisterInput) -> Result<(), FlowError> {
    if validate::blank(&input.first_name) {
        return Err(FlowError::Validation("First name is required".to_string()));
    }
    if validate::blank(&input.last_name) {
        return Err(FlowError::Validation("Last name is required".to_string()));
    }
    if validate::blank(&input.company_name) {
        return Err(FlowError::Validation(
            "Company name is required".to_string(),
        ));
    }
    if validate::blank(&input.email) {
        return Err(FlowError::Validation("Email is required".to_string()));
    }
    if !validate::valid_email(&input.email) {
        return Err(FlowError::Validation("Valid email is required".to_string()));
    }
    if validate::blank(&input.phone) {
        return Err(FlowError::Validation("Phone is required".to_string()));
    }
    if !validate::valid_phone(&input.phone) {
        return Err(FlowError::Validation(
            "Phone must contain only numbers (minimum 10 digits)".to_string(),
        ));
    }
    if validate::blank(&input.address) {
        return Err(FlowError::Validation("Address is required".to_string()));
    }

    Ok(())
}
