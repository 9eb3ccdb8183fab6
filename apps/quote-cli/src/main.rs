//! # quote
//!
//! Command-line front end for wedding-core.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quote Startup                                     │
//! │                                                                         │
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load QuoteConfig (file → env → validate)                            │
//! │  3. Initialize logging                                                  │
//! │     • RUST_LOG if set, else logging.level from config                   │
//! │     • logs go to stderr, stdout carries only JSON                       │
//! │     • replay warnings collected while loading the config                │
//! │  4. Run the subcommand, print the report as JSON                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::QuoteConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match QuoteConfig::load(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);
    for warning in &config.warnings {
        warn!("{warning}");
    }
    info!(source = ?config.source, year = config.pricing.default_year, "Configuration loaded");

    let output = commands::run(&cli.command, &config)
        .and_then(|report| Ok(serde_json::to_string_pretty(&report)?));

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing. `RUST_LOG` overrides the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
