use crate::{
    api::handlers::{change_password, forgot_password, health, login, profile, register},
    cli::globals::GlobalArgs,
    email::{EmailSender, LogEmailSender, SmtpEmailSender},
    uploads::UploadStore,
};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request},
    routing::{get, post, put},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug_span, error, info, Span};
use ulid::Ulid;

pub mod handlers;
pub mod openapi;

/// Start the server
/// # Errors
/// Returns an error if the server fails to start
pub async fn serve(port: u16, dsn: String, globals: GlobalArgs) -> Result<()> {
    // Connect to database
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .max_lifetime(Duration::from_secs(60 * 2))
        .test_before_acquire(true)
        .connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    let uploads = UploadStore::new(globals.upload_dir.clone()).await?;

    let mailer: Arc<dyn EmailSender> = match &globals.smtp {
        Some(settings) => Arc::new(SmtpEmailSender::new(settings, &globals.smtp_from)?),
        None => {
            info!("SMTP relay not configured, outgoing mail goes to the log");
            Arc::new(LogEmailSender)
        }
    };

    let cors = CorsLayer::new()
        // allow `GET`, `POST` and `PUT` when accessing the resource
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        // allow requests from any origin
        .allow_origin(Any);

    let app = router().layer(
        ServiceBuilder::new()
            .layer(SetRequestHeaderLayer::if_not_present(
                HeaderName::from_static("x-request-id"),
                |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                "x-request-id",
            )))
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(cors)
            .layer(Extension(globals))
            .layer(Extension(uploads))
            .layer(Extension(mailer))
            .layer(Extension(pool)),
    );

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login))
        .route("/profile", put(profile::profile))
        .route("/forgot-password", post(forgot_password::forgot_password))
        .route("/change-password", post(change_password::change_password))
        .route("/health", get(health::health))
        .route("/openapi.json", get(openapi::openapi_json))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("Failed to install shutdown signal handler: {}", error);
    }

    info!("Gracefully shutdown");
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let path = request.uri().path();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, request_id)
}
