// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the business model catalog
// Usage: cargo run --bin api_server

use bizmodel_scorer::{create_router, AppState, ServerConfig};
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
                    "bizmodel_scorer=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!(
        "  CATALOG_PATH: {}",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    tracing::info!("  CACHE_CAPACITY: {}", config.cache_capacity);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl.as_secs());
    tracing::info!("  PREVIEW_COUNT: {}", config.preview_count);

    // Initialize application state (loads catalog, builds cache)
    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
