//! # vinted-api
//!
//! HTTP service for Vinted Optimizer: serves the landing page and the
//! health/readiness probes used by monitors and load balancers.
//!
//! - [`config`] - settings from defaults, TOML file, environment and flags
//! - [`logging`] - tracing subscriber setup
//! - [`probes`] - reachability checks for database and redis
//! - [`http`] - axum router and handlers

pub mod config;
pub mod http;
pub mod logging;
pub mod probes;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use config::{Cli, ConfigError, Environment, Settings};
pub use http::{AppState, router};

/// Bind, serve until Ctrl-C/SIGTERM, then drain in-flight requests.
pub async fn serve(settings: Settings) -> Result<()> {
    let addr = settings.bind_addr()?;
    info!(
        version = %settings.version,
        environment = %settings.env,
        "Starting {}",
        settings.app_name
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    let app = router(Arc::new(AppState::new(settings)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Application shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
