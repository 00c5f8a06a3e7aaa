//! Airport route lookup server
//!
//! Builds the code directory from the CSV source once at startup, then
//! serves lookups over HTTP.
//!
//! Usage:
//!   ./target/release/airport_routes [options]
//!
//! Options:
//!   --port PORT    Port to listen on (default: 8080)
//!   --data PATH    Path to the airport CSV file (default: data/airport_data.csv)
//!
//! Endpoints:
//!   GET  /        - Lookup form page
//!   POST /        - Resolve newline-separated "ORIGIN-DESTINATION" pairs
//!   GET  /health  - Health check

use airport_routes::{api, ingest};
use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Airport route metadata lookup server
#[derive(Parser, Debug)]
#[command(name = "airport_routes")]
#[command(about = "Serve airport/metro lookups for ORIGIN-DESTINATION pairs")]
struct Args {
    /// Path to the airport CSV file
    #[arg(long, default_value = "data/airport_data.csv")]
    data: PathBuf,

    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();

    let directory = Arc::new(ingest::load_directory(&args.data)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", args.port).parse()?;
    let app = api::router(directory);

    info!("Listening on http://localhost:{}", args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
