// API Server Binary Entry Point
//
// Purpose: Start the Axum API server for the OpenOA website
// Usage: cargo run --bin api_server

use openoa_site_api::{create_router, AppState, Catalog, Settings};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "openoa_site_api=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let settings = Settings::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  APP_NAME: {}", settings.app_name);
    tracing::info!("  APP_VERSION: {}", settings.app_version);
    tracing::info!("  APP_ENV: {}", settings.app_env);
    tracing::info!("  APP_PORT: {}", settings.app_port);
    tracing::info!("  API_PREFIX: {}", settings.api_prefix);
    tracing::info!("  Allowed origins: {:?} + /{}/", settings.allowed_origins(), settings.preview_origin);

    // Malformed content is a startup failure, never a per-request one
    let catalog = Catalog::builtin()?;
    tracing::info!(
        "Catalog loaded: {} analysis methods, {} features, {} team members",
        catalog.analysis_methods().len(),
        catalog.features().len(),
        catalog.team().len()
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.app_port));
    let app = create_router(AppState::new(catalog, settings));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
