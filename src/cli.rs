//! Command-line interface for tictactoe_vs_ai.

use clap::{Parser, Subcommand};
use tictactoe_vs_ai::PickerKind;

/// Tic-tac-toe against a computer that plays random moves
#[derive(Parser, Debug)]
#[command(name = "tictactoe_vs_ai")]
#[command(about = "Play tic-tac-toe against a random-move AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Pause before the AI moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// AI strategy
        #[arg(long, value_enum)]
        ai: Option<PickerKind>,

        /// Seed for the random AI
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play random-versus-random games and print a JSON tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Seed for reproducible batches
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: "tictactoe.toml".into(),
            delay_ms: None,
            ai: None,
            seed: None,
        }
    }
}
