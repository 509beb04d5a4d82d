//! # Main Entry Point
//!
//! Initializes the agent and answers exactly one message:
//! - Domain: Configuration and Types
//! - Infrastructure: CoinGecko client
//! - Application: Intent parsing, Router, Formatting, Logging
//! - Interface: Command Handlers and CLI
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::coingecko::CoingeckoClient;
use crate::interface::cli::{self, Args};
use crate::strings::logs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let (config, config_path) = AppConfig::load()?;

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    match &config_path {
        Some(path) => tracing::debug!("{}", logs::config_loaded(&path.display().to_string())),
        None => tracing::debug!("{}", logs::CONFIG_DEFAULTS),
    }

    // 3. Infrastructure
    let coins = Arc::new(CoingeckoClient::new(&config.services.coingecko)?);
    let router = CommandRouter::new(coins);

    // 4. One message in, one answer out
    let message = match args.message() {
        Some(message) => message,
        None => cli::read_message_interactively()?,
    };

    println!("{}", router.route(&message).await);

    Ok(())
}
