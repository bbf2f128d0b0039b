//! Main entry point for the gamenet admin API server

use gamenet_api::build_router;
use gamenet_core::{Config, Dataset, Error, Result, init_logging};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    // Load configuration before logging so the configured level applies
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(&config.logging)?;
    if let Some(err) = config_error {
        warn!("Failed to load config ({}), using defaults", err);
    }

    info!(
        "Gamenet admin API v{} starting on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.server.host,
        config.server.port
    );

    let dataset = match &config.data.seed_file {
        Some(path) => Dataset::from_file(path).inspect_err(|e| {
            error!("Failed to load dataset from {}: {}", path.display(), e);
        })?,
        None => {
            warn!("No seed file configured, serving an empty dataset");
            Dataset::default()
        }
    };

    let app = build_router(config.clone(), dataset)?
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| Error::Configuration {
            message: format!("Invalid server address: {e}"),
        })?;

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr} (health: http://{addr}/health)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
