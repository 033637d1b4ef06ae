//! Tic-tac-toe CLI
//!
//! Plays in the terminal or replays action scripts headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Format};
use std::path::Path;
use tictactoe_timetravel::{
    AppConfig, Variant, load_actions, new_session, replay, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { variant } => {
            let variant = variant.unwrap_or(*config.variant());
            init_file_tracing(&config)?;
            run_tui(variant, config.with_variant(variant))
        }
        Command::Replay {
            actions,
            variant,
            format,
        } => {
            init_stderr_tracing(&config);
            let variant = variant.unwrap_or(*config.variant());
            run_replay(&actions, variant, format, &config)
        }
    }
}

/// Apply an action script and print the final view
#[instrument(skip(config), fields(actions = %actions.display()))]
fn run_replay(actions: &Path, variant: Variant, format: Format, config: &AppConfig) -> Result<()> {
    let script = load_actions(actions)?;
    let mut session = new_session(variant, config);
    let view = replay(session.as_mut(), &script);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        Format::Text => println!("{}", view.render_text()),
    }
    Ok(())
}

/// TUI logs go to a file so they do not draw over the screen.
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    info!("TUI tracing initialized");
    Ok(())
}

fn init_stderr_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
