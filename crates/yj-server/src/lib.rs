//! HTTP service for Yijing.
//!
//! Serves coin casts, hexagram reference texts, offline commentary and
//! forwarding to an AI interpretation service over a JSON API built on axum.

pub mod config;
pub mod error;
mod handlers;
mod router;
mod state;
pub mod types;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::create_router;
pub use state::AppState;

/// Run the HTTP server until Ctrl-C.
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let addr = config.server_addr();
    let state = AppState::new(config)?;

    let table = state.resolver().table();
    tracing::info!(
        records = table.len(),
        source = ?state.resolver().source(),
        "reference data loaded"
    );

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Yijing server listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
