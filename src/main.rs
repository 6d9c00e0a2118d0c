//! tictactoe_vs_ai - terminal entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_vs_ai::{GameConfig, GameSession, PickerKind, run_console, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            delay_ms,
            ai,
            seed,
        } => run_play(config, delay_ms, ai, seed).await,
        Command::Simulate { games, seed } => run_simulate(games, seed),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config.display()))]
async fn run_play(
    config: std::path::PathBuf,
    delay_ms: Option<u64>,
    ai: Option<PickerKind>,
    seed: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config)
        .context("Failed to load game config")?
        .with_overrides(delay_ms, ai, seed);
    info!(?config, "Starting game");

    let mut session = GameSession::from_config(&config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_console(&mut session, stdin, tokio::io::stdout()).await
}

/// Run a headless batch and print the tally as JSON
#[instrument]
fn run_simulate(games: u64, seed: Option<u64>) -> Result<()> {
    let tally = simulate(games, seed);
    let json = serde_json::to_string_pretty(&tally).context("Failed to serialize tally")?;
    println!("{json}");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(verbose: bool) {
    let default = if verbose {
        "info,tictactoe_vs_ai=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
