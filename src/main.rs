//! Gluetun Web UI backend.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │               GLUETUN WEB UI                 │
//!                        │                                              │
//!   Browser              │  ┌──────────┐   ┌───────────┐   ┌─────────┐  │
//!   ─────────────────────┼─▶│  http    │──▶│ handlers  │──▶│upstream │──┼──▶ Gluetun
//!                        │  │  server  │   │ vpn       │   │ client  │  │    control
//!                        │  └────┬─────┘   │ health ───┼──▶│ (auth,  │  │    server
//!                        │       │         └───────────┘   │ timeout)│  │
//!                        │       ▼                         └─────────┘  │
//!                        │  ┌──────────┐                                │
//!                        │  │  static  │  public/ + index.html fallback │
//!                        │  └──────────┘                                │
//!                        │                                              │
//!                        │  config · observability · lifecycle          │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use gluetun_webui::config::load_config;
use gluetun_webui::lifecycle::{signals, startup};
use gluetun_webui::observability::logging;
use gluetun_webui::Shutdown;

#[derive(Parser)]
#[command(name = "gluetun-webui")]
#[command(about = "Web UI backend for the Gluetun VPN container", long_about = None)]
struct Cli {
    /// Optional TOML config file. Environment variables override it.
    #[arg(short, long, env = "GLUETUN_WEBUI_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gluetun-webui starting");
    tracing::info!(
        port = config.listener.port,
        upstream = %config.upstream.base_url,
        timeout_ms = config.upstream.timeout_ms,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_watcher(shutdown.clone());

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
