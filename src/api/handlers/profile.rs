use crate::{
    api::handlers::require_auth,
    cli::globals::GlobalArgs,
    flows::{self, FlowError},
    retailer::{
        models::{RetailerPatch, RetailerProfile},
        repo::PgCredentialStore,
    },
    uploads::UploadStore,
};
use axum::{
    extract::{Extension, Multipart},
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// Multipart profile patch. Every part is optional; blank text parts are
/// treated as absent.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProfileForm {
    first_name: Option<String>,
    last_name: Option<String>,
    company_name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    company_logo: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    profile_image: Option<String>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ProfileResponse {
    message: String,
    retailer: RetailerProfile,
}

#[utoipa::path(
    put,
    path = "/profile",
    request_body(content = ProfileForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Identity no longer maps to a retailer")
    ),
    security(("bearer_token" = [])),
    tag = "profile"
)]
// axum handler for profile update
pub async fn profile(
    headers: HeaderMap,
    Extension(pool): Extension<PgPool>,
    Extension(globals): Extension<GlobalArgs>,
    Extension(uploads): Extension<UploadStore>,
    multipart: Multipart,
) -> Result<impl IntoResponse, FlowError> {
    let id = require_auth(&headers, &globals)?;

    let patch = parse_patch(multipart, &uploads).await?;

    let store = PgCredentialStore::new(&pool);
    let retailer = flows::profile::run(&store, id, patch).await?;

    Ok(Json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        retailer: RetailerProfile::from(retailer),
    }))
}

async fn parse_patch(
    mut multipart: Multipart,
    uploads: &UploadStore,
) -> Result<RetailerPatch, FlowError> {
    let mut patch = RetailerPatch::default();

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
                patch.company_logo = Some(reference);
            } else {
                patch.profile_image = Some(reference);
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|err| FlowError::Validation(format!("Invalid form data: {err}")))?;

            match name.as_str() {
                "firstName" => patch.first_name = Some(value),
                "lastName" => patch.last_name = Some(value),
                "companyName" => patch.company_name = Some(value),
                "phone" => patch.phone = Some(value),
                "address" => patch.address = Some(value),
                _ => {}
            }
        }
    }

    Ok(patch)
}
