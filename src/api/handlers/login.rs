use crate::{
    cli::globals::GlobalArgs,
    flows::{self, FlowError},
    retailer::{models::RetailerProfile, repo::PgCredentialStore},
};
use axum::{
    extract::Extension,
    response::{IntoResponse, Json},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct LoginResponse {
    message: String,
    token: String,
    retailer: RetailerProfile,
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, bearer token issued", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "auth"
)]
// axum handler for login
pub async fn login(
    Extension(pool): Extension<PgPool>,
    Extension(globals): Extension<GlobalArgs>,
    payload: Option<Json<LoginRequest>>,
) -> Result<impl IntoResponse, FlowError> {
    let Some(Json(payload)) = payload else {
        return Err(FlowError::Validation("Valid email is required".to_string()));
    };

    let store = PgCredentialStore::new(&pool);
    let output = flows::login::run(
        &store,
        globals.jwt_secret.expose_secret(),
        globals.token_ttl_days,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: output.token,
        retailer: RetailerProfile::from(output.retailer),
    }))
}
