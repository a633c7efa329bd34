//! Sentinela RDW HTTP Server Binary
//!
//! This is the main entry point for the surveillance REST API server.
//! It initializes the dataset store, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sentinela-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SENTINELA_CONFIG`: Path to a TOML config file (overrides HOST/PORT)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sentinela_rdw::config::ServerConfig;
use sentinela_rdw::http::{create_router, AppState};
use sentinela_rdw::services::DatasetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Sentinela RDW HTTP Server");

    let config = ServerConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    // Empty dataset store; the first upload installs the initial aggregates.
    let state = AppState::new(DatasetStore::new());

    // Create router with all endpoints
    let app = create_router(state, &config);

    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
