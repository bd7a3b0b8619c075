// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! opsboard: IT operations dashboard server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use opsboard::{server, AppState, ServerConfig};

/// opsboard: tickets, users and compliance over REST
#[derive(Parser, Debug)]
#[command(name = "opsboard")]
#[command(about = "REST backend for the IT operations dashboard")]
struct Args {
    /// Path to a TOML config file (defaults to ./opsboard.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Directory for the JSON data files
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = ServerConfig::load(args.config.as_deref())?
        .with_overrides(args.bind, args.data, args.verbose);

    init_logging(&config.log_level)?;

    info!("Starting opsboard server");
    info!("  Bind address: {}", config.bind);
    info!("  Data directory: {}", config.data_dir.display());

    let state = AppState::new(&config.data_dir);
    server::run(config.bind, state).await?;

    Ok(())
}
