//! Opsdeck API server — REST-like JSON API over flat-file record stores.
//!
//! Serves `/api/tasks` and `/api/users`, each backed by one pretty-printed
//! JSON file under the configured data directory. Missing files are
//! recreated lazily by the reading path.
//!
//! # Usage
//!
//! ```bash
//! # Run on the default address 127.0.0.1:8320 with data under ./data
//! cargo run --bin opsdeck-server
//!
//! # Custom address and data directory
//! cargo run --bin opsdeck-server -- --bind 0.0.0.0:9100 --data-dir /var/lib/opsdeck
//!
//! # Or via environment variables
//! OPSDECK_ADDR=0.0.0.0:9100 cargo run --bin opsdeck-server
//! ```

use std::sync::Arc;

use clap::Parser;
use opsdeck_server::config::{ServerCliArgs, ServerConfig};
use opsdeck_server::routes::{self, AppState};

#[tokio::main]
async fn main() {
    let cli = ServerCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        "starting opsdeck api server"
    );

    let state = Arc::new(AppState::new(&config.data_dir));

    match routes::start_server_with_state(&config.bind_addr, state).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "api server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "api server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start api server");
            std::process::exit(1);
        }
    }
}
