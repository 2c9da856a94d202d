use crate::{
    email::EmailSender,
    flows::{self, register::RegisterInput, FlowError},
    retailer::repo::PgCredentialStore,
    uploads::UploadStore,
};
use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Multipart registration form. `companyLogo` and `profileImage` are optional
/// file parts; everything else is a text part.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct RegisterForm {
    first_name: String,
    last_name: String,
    company_name: String,
    email: String,
    phone: String,
    address: String,
    #[schema(value_type = Option<String>, format = Binary)]
    company_logo: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    profile_image: Option<String>,
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    message: String,
    retailer_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Retailer registered, password emailed", body = RegisterResponse),
        (status = 400, description = "Validation failure or duplicate email"),
        (status = 500, description = "Email delivery failed, no account created")
    ),
    tag = "auth"
)]
// axum handler for register
pub async fn register(
    Extension(pool): Extension<PgPool>,
    Extension(uploads): Extension<UploadStore>,
    Extension(mailer): Extension<Arc<dyn EmailSender>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, FlowError> {
    let input = parse_form(multipart, &uploads).await?;

    let store = PgCredentialStore::new(&pool);
    let id = flows::register::run(&store, mailer.as_ref(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Retailer registered successfully. Check your email for login details."
                .to_string(),
            retailer_id: id,
        }),
    ))
}

/// Drain the multipart stream into a [`RegisterInput`], resolving file parts
/// to stored references first so the flow only ever sees strings.
async fn parse_form(
    mut multipart: Multipart,
    uploads: &UploadStore,
) -> Result<RegisterInput, FlowError> {
    let mut input = RegisterInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| FlowError::Validation(format!("Invalid form data: {err}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "companyLogo" || name == "profileImage" {
            let original = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| FlowError::Validation(format!("Invalid form data: {err}")))?;
            if bytes.is_empty() {
                continue;
            }

            let reference = uploads.store(&original, &bytes).await?;
            if name == "companyLogo" {
                input.company_logo = Some(reference);
            } else {
                input.profile_image = Some(reference);
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|err| FlowError::Validation(format!("Invalid form data: {err}")))?;

            match name.as_str() {
                "firstName" => input.first_name = value,
                "lastName" => input.last_name = value,
                "companyName" => input.company_name = value,
                "email" => input.email = value,
                "phone" => input.phone = value,
                "address" => input.address = value,
                _ => {}
            }
        }
    }

    Ok(input)
}
