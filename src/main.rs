//! ATM API - Main Application Entry Point
//!
//! A REST API server that reports account balances and accepts deposits and
//! withdrawals. Balances live in memory for the lifetime of the process.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory account store, one lock per account
//! - **Money**: Integer cents, never floats
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Seed the account store
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured address until Ctrl+C

mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod store;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let store = store::AccountStore::from_seed(config.seed_accounts()?);
    tracing::info!(accounts = store.account_count(), "Account store seeded");

    let app = routes::create_router(store);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Requests are served concurrently on the tokio runtime
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
