use crate::api;
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{Context, Result};
use tracing::info;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Validate the DSN up front so a typo fails before binding the port.
            let parsed = Url::parse(&dsn).context("Invalid database DSN")?;

            info!(
                host = parsed.host_str().unwrap_or("unknown"),
                database = parsed.path().trim_start_matches('/'),
                "Connecting to database"
            );

            api::serve(port, dsn, globals.clone()).await?;
        }
    }

    Ok(())
}
