//! Secret Santa API server entry point.

use std::sync::Arc;

use secret_santa_api::config::ServerConfig;
use secret_santa_api::error::AppError;
use secret_santa_api::state::AppState;
use secret_santa_core::seed::RandomSeedSource;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Secret Santa API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    // Build application state.
    let app_state = AppState::new(Arc::new(RandomSeedSource), config.public_base_url.clone());

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = secret_santa_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!(public_base_url = %config.public_base_url, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
