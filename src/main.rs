//! Customer Service - A small HTTP service for customer records
//!
//! Maps `POST`/`GET`/`PUT`/`DELETE` on `/customers` onto a keyed store
//! backed by SQLite.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use customer_service::{create_router, store::seed_customers, AppState, Config, SqliteCustomerStore};

/// Main entry point for the customer service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to SQLite and apply migrations
/// 4. Seed example customers when enabled
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM, then close the pool
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "customer_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Customer Service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: database_url={}, port={}, max_connections={}, seed_data={}",
        config.database_url, config.server_port, config.max_connections, config.seed_data
    );

    // Open the database and bring the schema up to date
    let store = SqliteCustomerStore::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open customer database")?;
    store
        .migrate()
        .await
        .context("failed to apply database migrations")?;
    info!("Customer store initialized");

    if config.seed_data {
        seed_customers(&store)
            .await
            .context("failed to seed example customers")?;
    }

    // Create router with all endpoints
    let app = create_router(AppState::new(store.clone()));

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // Let in-flight queries finish before exiting
    store.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
