//! Tic-tac-toe against the computer.
//!
//! The human player moves first; the computer answers with a uniformly
//! random empty square after a short pause.
//!
//! # Architecture
//!
//! - **Engine**: board, turn and outcome state machine ([`GameEngine`])
//! - **Rules**: pure outcome evaluation ([`check_outcome`])
//! - **Session**: frontend boundary with the AI pause and change events
//! - **Console**: line-based terminal frontend
//! - **Simulate**: headless random-versus-random batches
//!
//! # Example
//!
//! ```
//! use tictactoe_vs_ai::{FirstAvailable, GameEngine, Outcome, Turn};
//!
//! let mut engine = GameEngine::with_picker(Box::new(FirstAvailable));
//! engine.apply_player_move(4);
//! assert_eq!(engine.turn(), Turn::Ai);
//!
//! engine.apply_ai_move();
//! assert_eq!(engine.turn(), Turn::Player);
//! assert_eq!(engine.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod session;
mod simulate;
pub mod tictactoe;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Frontend
pub use console::{Command, outcome_banner, run_console};
pub use session::{GameEvent, GameSession};
pub use simulate::{Tally, simulate};

// Crate-level exports - Game types
pub use tictactoe::{
    Board, FirstAvailable, GameEngine, GameSnapshot, Mark, Move, MoveOutcome, MovePicker, Outcome,
    ParseBoardError, PickerKind, Position, RandomPicker, Rejection, Square, Turn, check_outcome,
};
