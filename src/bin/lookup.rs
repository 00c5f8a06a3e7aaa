//! Offline route lookup
//!
//! Resolves route pairs from the command line without starting the server.
//!
//! Usage:
//!   ./target/release/lookup [--data PATH] PAIR [PAIR ...]
//!
//! Examples:
//!   ./target/release/lookup JFK-LAX
//!   ./target/release/lookup --data data/airport_data.csv NYC-LAX jfk-sfo

use airport_routes::{ingest, resolve};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Resolve ORIGIN-DESTINATION pairs against the airport directory
#[derive(Parser, Debug)]
#[command(name = "lookup")]
#[command(about = "Resolve ORIGIN-DESTINATION pairs against the airport directory")]
struct Args {
    /// Path to the airport CSV file
    #[arg(long, default_value = "data/airport_data.csv")]
    data: PathBuf,

    /// Route pairs to resolve, e.g. JFK-LAX
    #[arg(required = true)]
    pairs: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let args = Args::parse();
    let directory = ingest::load_directory(&args.data)?;

    for pair in &args.pairs {
        let result = resolve(pair, &directory);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
