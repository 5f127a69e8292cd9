use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vendomatic::application::engine::VendingEngine;
use vendomatic::config::Config;
use vendomatic::interfaces::http;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vendomatic=info")),
        )
        .init();

    let config = Config::parse();
    let addr = config.socket_addr();

    // One machine for the life of the process.
    let engine = Arc::new(VendingEngine::new());

    let listener = TcpListener::bind(addr).await.into_diagnostic()?;
    info!(%addr, "Vend-O-Matic listening");

    http::serve(listener, engine, shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
