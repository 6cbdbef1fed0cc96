//! GRE backend HTTP server binary

use anyhow::Context;
use gre_backend::{create_router, AppState, Config};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting gre-backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("failed to load configuration")?;

    let state = AppState::new(config);
    let addr = state.config.bind_addr();
    let app = create_router(state);

    // Bind failure is fatal: no retry, no fallback port.
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("API server listening on {}", addr);

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, shutting down gracefully...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}
