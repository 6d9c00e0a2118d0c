//! Tic-tac-toe: a human player against a computer opponent.

mod action;
pub mod ai;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveOutcome, Rejection};
pub use ai::{FirstAvailable, MovePicker, PickerKind, RandomPicker};
pub use engine::GameEngine;
pub use position::Position;
pub use rules::check_outcome;
pub use types::{Board, GameSnapshot, Mark, Outcome, ParseBoardError, Square, Turn};
