//! StudyBuddy service binary
//!
//! Loads configuration, wires the relay strategy and session store into
//! the API server, and serves until shutdown.

mod cli;

use std::sync::Arc;

use studybuddy_api::{ApiConfig, ApiServer};
use studybuddy_core::AppConfig;
use studybuddy_relay::create_relay;
use studybuddy_store::SessionStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match cli::parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    if args.show_version {
        println!("studybuddy v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.show_help {
        println!("{}", cli::USAGE);
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(&args).await {
        tracing::error!("fatal: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: &cli::Args) -> anyhow::Result<()> {
    let config = AppConfig::load(args.config_path())?;

    let relay = create_relay(&config.relay)?;
    let store = Arc::new(SessionStore::new(&config.store.db_path)?);

    let server = ApiServer::new(
        ApiConfig {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        relay,
        store,
    );
    server.start().await
}
