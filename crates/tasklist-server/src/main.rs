//! tasklist-server
//!
//! # Environment Variables
//!
//! - `APP_ENV`: `dev` (default) | `stage` | `acc` | `sandbox` | `prod`
//! - `LOG_LEVEL`: default log level (default: `info`); `RUST_LOG` overrides it
//! - `HTTP_PORT`: listen port (default: `8080`)
//! - `HTTP_HOST`: listen address (default: `0.0.0.0`)

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;

use tasklist_server::{AppState, Config, create_router, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init(config.environment, &config.log_level)?;

    tracing::info!(
        environment = ?config.environment,
        addr = %config.listen_addr(),
        "Starting application"
    );

    // store → service → router, wired once here
    let router = create_router(AppState::in_memory());

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    tracing::info!("Shutting down application");
    let _ = stop_tx.send(());

    // In-flight requests get at most the environment's shutdown timeout.
    let timeout = config.environment.shutdown_timeout();
    if config.environment.drains_on_shutdown() {
        match tokio::time::timeout(timeout, server).await {
            Ok(joined) => joined
                .context("server task failed")?
                .context("server error")?,
            Err(_) => tracing::warn!(?timeout, "shutdown timeout elapsed, dropping open connections"),
        }
    } else {
        server.abort();
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Completes on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
}
