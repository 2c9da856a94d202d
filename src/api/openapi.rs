//! OpenAPI document assembled from the `#[utoipa::path]` annotations on the
//! handlers; served at `GET /openapi.json`.

use crate::api::handlers::{
    change_password, forgot_password, health, login, profile, register,
};
use crate::retailer::models::RetailerProfile;
use axum::response::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

struct BearerToken;

impl Modify for BearerToken {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        register::register,
        login::login,
        profile::profile,
        forgot_password::forgot_password,
        change_password::change_password,
    ),
    components(schemas(
        health::Health,
        register::RegisterForm,
        register::RegisterResponse,
        login::LoginRequest,
        login::LoginResponse,
        profile::ProfileForm,
        profile::ProfileResponse,
        forgot_password::ForgotPasswordRequest,
        forgot_password::ForgotPasswordResponse,
        change_password::ChangePasswordRequest,
        change_password::ChangePasswordResponse,
        RetailerProfile,
    )),
    modifiers(&BearerToken),
    tags(
        (name = "auth", description = "Retailer credential lifecycle"),
        (name = "profile", description = "Authenticated profile updates"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

// axum handler for the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/register",
            "/login",
            "/profile",
            "/forgot-password",
            "/change-password",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_openapi_serializes() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("bearer_token"));
    }
}
