//! DEV URN API server
//!
//! Exposes subtype listing, detection, validation, generation and breakdown
//! of RFC 9039 device URNs over HTTP.

use anyhow::Result;
use devurn_api::{api, config, state::AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to DEVURN_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting DEV URN API");
    info!(
        listen_addr = %config.listen_addr,
        detect_hex16 = %config.detect_policy.bare_hex16,
        detect_pen_pair = %config.detect_policy.pen_pair,
        "Configuration loaded"
    );

    let state = AppState::new(&config);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = &result {
        error!(error = %e, "Server error");
    }
    result?;

    info!("DEV URN API shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C. If the signal handler cannot be installed the server
/// keeps running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
