//! Library half of the `mcp-bridge` command-line tool.
//!
//! Handles logging setup, config-file defaults, argument parsing, and
//! dispatch to the conversion commands.

#![deny(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use commands::ConvertRequest;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MCP_BRIDGE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The main entry point for the `mcp-bridge` application.
pub fn run() -> Result<()> {
    init_tracing();
    config::apply_config_to_env().context("Failed to load ~/.mcp-bridge/config.toml")?;

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    match cli.command {
        Commands::Convert {
            from,
            to,
            no_detect,
            output,
            merge,
            input,
        } => {
            let request = ConvertRequest {
                from,
                to,
                auto_detect: !no_detect,
                output,
                merge,
                input,
            };
            commands::convert(&request, &mut stdout, &mut stderr)
        }
        Commands::Detect { input } => commands::detect(input.as_deref(), &mut stdout),
        Commands::Formats => commands::formats(&mut stdout),
    }
}
