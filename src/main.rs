//! Feature flag watcher.
//!
//! Evaluates one boolean flag through the LaunchDarkly SDK on a fixed cadence
//! and logs every change of its value.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env ──▶ startup ──▶ LaunchDarkly client ◀──────────────┐
//!                              │                             │
//!                              ▼                             │
//!                        ┌──────────┐  single-slot  ┌──────────┐
//!                        │  poller  │──────────────▶│ notifier │──▶ log
//!                        └──────────┘    channel    └──────────┘
//!                              ▲                             │
//!   SIGINT/SIGTERM ──▶ shutdown ┴─────── join ──▶ close ─────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use flag_watch::config::{load_config, loader, ConfigError, WatchConfig};
use flag_watch::flags::LaunchDarklyConnector;
use flag_watch::lifecycle::{bootstrap, signals, Watch};
use flag_watch::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "flag-watch")]
#[command(about = "Watch a LaunchDarkly boolean flag and log its changes", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Env file holding the SDK key (overrides config).
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Flag key to watch (overrides config).
    #[arg(long)]
    flag: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> Result<WatchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => WatchConfig::default(),
        };
        if let Some(env_file) = &self.env_file {
            config.sdk.env_file = env_file.display().to_string();
        }
        if let Some(flag) = &self.flag {
            config.flag.key = flag.clone();
        }
        loader::validated(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging("info");
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("flag-watch v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let started = match bootstrap(&config, &LaunchDarklyConnector).await {
        Ok(started) => started,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        flag_key = %config.flag.key,
        context_key = %started.context.key(),
        "Watching flag"
    );

    let report = Watch::new(started.client, config.flag.clone())
        .run_until(signals::termination())
        .await;

    if let Some(e) = &report.termination_error {
        tracing::error!(error = %e, transitions = report.transitions, "Stopped without a termination signal");
        return ExitCode::FAILURE;
    }

    tracing::info!(transitions = report.transitions, "Shutdown complete");
    ExitCode::SUCCESS
}
