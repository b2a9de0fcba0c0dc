//! Claw Jobs Agent
//!
//! A polling worker that earns sats by completing gigs on the Claw Jobs
//! marketplace.
//!
//! Architecture:
//! - Configuration: CLI flags and `CLAW_*` environment variables over defaults
//! - Repositories: the marketplace API and the local credential record
//! - Services: registration, gig listing, matching, work and fulfilment
//! - Scheduler: the work cycle and the continuous loop around it
//!
//! Each cycle lists open gigs, applies to the best match, then works on and
//! submits a deliverable for every accepted application.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_CAPABILITIES, DEFAULT_STATE_FILE};
use crate::repository::{FileCredentialStore, HttpMarketplaceRepository};
use crate::scheduler::CycleRunner;
use crate::service::Registrar;
use claw_client::MarketplaceClient;

#[derive(Parser)]
#[command(name = "claw-agent")]
#[command(about = "Claw Jobs marketplace agent", long_about = None)]
struct Cli {
    /// Marketplace API root
    #[arg(long, env = "CLAW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Display name to register with (random when unset)
    #[arg(long, env = "CLAW_AGENT_NAME")]
    name: Option<String>,

    /// Comma-separated capabilities, in matching priority order
    #[arg(long, env = "CLAW_CAPABILITIES", value_delimiter = ',')]
    capabilities: Vec<String>,

    /// Lightning address to receive payouts
    #[arg(long, env = "CLAW_LIGHTNING_ADDRESS")]
    lightning_address: Option<String>,

    /// Seconds between cycles in continuous mode
    #[arg(long, env = "CLAW_CYCLE_INTERVAL", default_value_t = 300)]
    interval: u64,

    /// Seconds of simulated work per deliverable
    #[arg(long, env = "CLAW_WORK_DELAY", default_value_t = 2)]
    work_delay: u64,

    /// File holding the persisted API key
    #[arg(long, env = "CLAW_STATE_FILE", default_value = DEFAULT_STATE_FILE)]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Register if needed and run a single cycle (default)
    Once,
    /// Register if needed and run cycles until stopped
    Run,
}

impl Cli {
    fn into_config(self) -> Config {
        let capabilities = if self.capabilities.is_empty() {
            DEFAULT_CAPABILITIES.iter().map(|c| c.to_string()).collect()
        } else {
            self.capabilities
                .into_iter()
                .map(|c| c.trim().to_string())
                .collect()
        };

        let mut config = Config::new(
            self.name.unwrap_or_else(config::generate_display_name),
            capabilities,
        )
        .with_lightning_address(self.lightning_address);

        config.base_url = self.base_url.trim_end_matches('/').to_string();
        config.cycle_interval = Duration::from_secs(self.interval);
        config.work_delay = Duration::from_secs(self.work_delay);
        config.state_file = self.state_file;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claw_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Claw Jobs agent");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Once);
    let config = cli.into_config();
    config.validate()?;

    info!(
        "Loaded configuration: name={}, base_url={}, capabilities=[{}]",
        config.display_name,
        config.base_url,
        config.capabilities.join(", ")
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let client = MarketplaceClient::with_client(config.base_url.clone(), http);

    // Register (or load the stored identity) before any work
    let store = Arc::new(FileCredentialStore::new(config.state_file.clone()));
    let registrar = Registrar::new(
        config.clone(),
        store,
        Arc::new(HttpMarketplaceRepository::new(client.clone())),
    );
    let identity = registrar
        .ensure_identity()
        .await
        .context("Failed to register agent")?;

    let api_key = identity
        .api_key()
        .context("Registered identity has no API key")?
        .to_string();
    let repo = Arc::new(HttpMarketplaceRepository::new(client.with_api_key(api_key)));

    let runner = CycleRunner::new(&config, identity, repo);

    match command {
        Command::Once => {
            runner.run_once().await?;
            info!("Done. Use the `run` subcommand to keep working continuously");
        }
        Command::Run => {
            runner.run(None).await;
        }
    }

    Ok(())
}
