//! Weather service HTTP server
//!
//! Main entry point for the HTTP API server.

use std::net::SocketAddr;

use infrastructure::{AppConfig, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration decides the log format, so load it before tracing exists
    let (config, warnings, load_error) = match AppConfig::load() {
        Ok((config, warnings)) => (config, warnings, None),
        Err(e) => (AppConfig::default(), Vec::new(), Some(e)),
    };

    init_tracing(config.log_format())?;

    info!("🌤️ Weather service v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to read environment, using defaults: {}", e);
    }
    for warning in &warnings {
        warn!(variable = %warning.variable, "Invalid configuration value: {}", warning);
    }

    info!(
        host = %config.host,
        port = config.port,
        geocoding_api_url = %config.geocoding_api_url,
        weather_api_url = %config.weather_api_url,
        timeout = ?config.api_timeout(),
        log_format = %config.log_format(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather service: {e}"))?;

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
///
/// In-flight requests are drained by axum once this returns.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
