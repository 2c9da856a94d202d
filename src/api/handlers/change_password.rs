use crate::{
    api::handlers::require_auth,
    cli::globals::GlobalArgs,
    flows::{self, FlowError},
    retailer::repo::PgCredentialStore,
};
use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ChangePasswordResponse {
    message: String,
}

#[utoipa::path(
    post,
    path = "/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password replaced", body = ChangePasswordResponse),
        (status = 400, description = "Missing input or weak new password"),
        (status = 401, description = "Wrong current password or bad token"),
        (status = 404, description = "Identity no longer maps to a retailer")
    ),
    security(("bearer_token" = [])),
    tag = "auth"
)]
// axum handler for change password
pub async fn change_password(
    headers: HeaderMap,
    Extension(pool): Extension<PgPool>,
    Extension(globals): Extension<GlobalArgs>,
    payload: Option<Json<ChangePasswordRequest>>,
) -> Result<impl IntoResponse, FlowError> {
    let id = require_auth(&headers, &globals)?;

    let Some(Json(payload)) = payload else {
        return Err(FlowError::Validation(
            "Current password and new password are required".to_string(),
        ));
    };

    let store = PgCredentialStore::new(&pool);
    flows::password_change::run(
        &store,
        id,
        &payload.current_password,
        &payload.new_password,
    )
    .await?;

    Ok(Json(ChangePasswordResponse {
        message: "Password updated successfully".to_string(),
    }))
}
