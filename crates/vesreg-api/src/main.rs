//! # vesreg-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the vessel registry API.
//! Binds to a configurable port (default 8080).

use vesreg_api::auth::SecretToken;
use vesreg_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let auth_token = std::env::var("AUTH_TOKEN").ok().map(SecretToken::new);
    if auth_token.is_none() {
        tracing::warn!("AUTH_TOKEN not set — clerk endpoints are unauthenticated");
    }
    let config = AppConfig { port, auth_token };

    // Initialize database pool (optional — absent means in-memory only).
    let db_pool = vesreg_registry::db::init_pool().await.map_err(|e| {
        tracing::error!("database initialization failed: {e}");
        e
    })?;

    let state = AppState::with_pool(config, db_pool);

    // Hydrate the in-memory store from the database (if connected).
    state.hydrate_from_db().await.map_err(|e| {
        tracing::error!("database hydration failed: {e}");
        e
    })?;

    let app = vesreg_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("VESREG API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
