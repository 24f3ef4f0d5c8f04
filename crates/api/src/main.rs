mod auth;
mod config;
mod error;
mod middleware;
mod routes;
mod state;
mod uploader;

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use venue_cms_core::events::bus::EventBus;
use venue_cms_core::store::storage::FileStorage;
use venue_cms_core::store::ContentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration
    let config = config::AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting venue CMS API server");

    // Hydrate the content store from the durable slot (or seed it)
    let storage = FileStorage::new(&config.content_path);
    let event_bus = EventBus::new(config.event_bus_capacity);
    let store = ContentStore::open(storage, event_bus);
    tracing::info!(
        path = %config.content_path,
        revision = store.revision(),
        "Content store ready"
    );

    // Upstream clients
    let timeout = Duration::from_secs(config.upstream_timeout_secs);
    let auth_client = auth::AuthClient::new(config.auth_base_url.clone(), timeout)?;
    let asset_uploader = uploader::AssetUploader::new(
        config.asset_endpoint.clone(),
        config.upload_max_bytes,
        timeout,
    )?;

    // Build application state
    let state = state::AppState::new(store, config.clone(), auth_client, asset_uploader);

    // Build router with middleware
    let app = routes::build_router(state)
        .layer(middleware::trace_layer())
        .layer(middleware::cors_layer());

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
