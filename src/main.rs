//! Guest RSVP backend (v1)
//!
//! Collects attendance confirmations from the invitation page and serves
//! them to the admin dashboard.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /rsvp ──────────────┐
//!     GET  /lista, /stats ─────┤     ┌──────────┐     ┌────────────┐
//!     DELETE /sterge/{id} ─────┼────▶│  http    │────▶│   rsvp     │
//!     POST /login, /logout ────┘     │ handlers │     │  service   │
//!                                    └──────────┘     └─────┬──────┘
//!                                                           │
//!                         ┌─────────────────┬───────────────┼──────────────┐
//!                         ▼                 ▼               ▼              │
//!                   ┌──────────┐     ┌────────────┐   ┌───────────┐       │
//!                   │  admin   │     │ normalize  │   │   store   │       │
//!                   │  gate    │     │ (aliases)  │   │ lock+file │       │
//!                   └──────────┘     └────────────┘   └─────┬─────┘       │
//!                                                           ▼              │
//!                                                   responses.json         │
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use rsvp_backend::config::{load_config, schema::PLACEHOLDER_ADMIN_KEY};
use rsvp_backend::observability::{logging, metrics};
use rsvp_backend::lifecycle::signals;
use rsvp_backend::HttpServer;

#[derive(Parser)]
#[command(name = "rsvp-backend")]
#[command(about = "Guest RSVP collection backend", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults and environment
    /// overrides apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init(&config.observability.log_level);

    tracing::info!("rsvp-backend v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_file = %config.storage.data_file,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    if config.admin.key == PLACEHOLDER_ADMIN_KEY {
        tracing::warn!("Admin key is the built-in placeholder; set RSVP_ADMIN_KEY");
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener, signals::terminate()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
