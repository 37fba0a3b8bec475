//! IAM Token Guard server
//!
//! Serves token validation and token-protected routes for one account.

use tokio::net::TcpListener;

use iam_token_guard::api::build_router;
use iam_token_guard::auth::{resolve, GuardState, TokenValidator};
use iam_token_guard::config::Config;
use iam_token_guard::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting IAM Token Guard v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        account_sid = %config.account.account_sid,
        realm = ?config.account.realm(),
        "Configuration loaded"
    );

    // Requests are still served without credentials; each one gets a 403
    if let Err(e) = resolve(&config.account.account_sid, &config.account.credentials()) {
        tracing::warn!(error = %e, "Account credentials incomplete, all tokens will be denied");
    }

    let validator = TokenValidator::new(&config.iam).map_err(|e| {
        tracing::error!(error = %e, "Failed to create HTTP client");
        anyhow::anyhow!("HTTP client error: {}", e)
    })?;

    let state = GuardState::new(validator, config.account.clone());
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
