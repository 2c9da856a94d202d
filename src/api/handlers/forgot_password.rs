use crate::{
    email::EmailSender,
    flows::{self, FlowError},
    retailer::repo::PgCredentialStore,
};
use axum::{
    extract::Extension,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ForgotPasswordResponse {
    message: String,
}

#[utoipa::path(
    post,
    path = "/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Replacement password emailed", body = ForgotPasswordResponse),
        (status = 400, description = "Missing email"),
        (status = 404, description = "No retailer with this email"),
        (status = 500, description = "Delivery failed after the credential was rotated")
    ),
    tag = "auth"
)]
// axum handler for forgot password
pub async fn forgot_password(
    Extension(pool): Extension<PgPool>,
    Extension(mailer): Extension<Arc<dyn EmailSender>>,
    payload: Option<Json<ForgotPasswordRequest>>,
) -> Result<impl IntoResponse, FlowError> {
    let Some(Json(payload)) = payload else {
        return Err(FlowError::Validation("Email is required".to_string()));
    };

    let store = PgCredentialStore::new(&pool);
    flows::password_reset::run(&store, mailer.as_ref(), &payload.email).await?;

    Ok(Json(ForgotPasswordResponse {
        message: "A new password has been sent to your email address".to_string(),
    }))
}
