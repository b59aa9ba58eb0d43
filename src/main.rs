//! RBAC dashboard server
//!
//! Serves the access control store over a JSON management API.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use rbac_dashboard::Config;
use rbac_dashboard::server;
use rbac_dashboard::utils::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Command line options for the dashboard server
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to a YAML configuration file; RBAC_* variables are used when absent
    #[arg(short, long, env = "RBAC_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = Config::load(cli.config.as_deref()).await;
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if let Some(port) = cli.port {
        config.dashboard.server.port = port;
    }

    init_logging(config.logging()).context("failed to initialize logging")?;

    match &loaded {
        Ok(_) => info!("Configuration loaded"),
        Err(e) => warn!(error = %e, "Configuration loading failed, using default config"),
    }

    server::run_server(config)
        .await
        .context("dashboard server failed")
}
