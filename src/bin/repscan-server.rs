// ABOUTME: Main server binary for the Repscan gym catalog
// ABOUTME: Loads config from the environment, connects the database, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repscan server entry point

use anyhow::{Context, Result};
use clap::Parser;
use repscan_server::config::environment::ServerConfig;
use repscan_server::database::Database;
use repscan_server::logging;
use repscan_server::resources::ServerResources;
use repscan_server::routes::create_router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "repscan-server",
    about = "QR-code gym equipment catalog with admin-managed exercises",
    version
)]
struct Args {
    /// HTTP port to listen on (overrides HTTP_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env().context("Failed to initialize logging")?;

    let mut config = ServerConfig::from_env().context("Failed to load server configuration")?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    info!("Configuration loaded: {}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string())
        .await
        .context("Failed to connect to database")?;
    info!("Database connected and migrated");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));

    let app = create_router(resources).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Repscan server listening on http://{addr}");
    info!("  Public catalog:  GET  /admin/equipment, GET /admin/exercise");
    info!("  Admin session:   POST /admin/login, POST /admin/logout, GET /admin/check");
    info!("  Lookups:         GET  /admin/muscles, GET /admin/difficulties");
    info!("  Health:          GET  /health");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;

    Ok(())
}
