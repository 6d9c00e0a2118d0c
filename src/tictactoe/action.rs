//! Moves and the result of asking the engine to apply one.
//!
//! Invalid requests are not errors: the engine ignores them and reports
//! which precondition was not met so callers can log or test it.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the side making this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
    /// A player move was requested during the AI's turn.
    #[display("It's not the player's turn")]
    NotPlayersTurn,
    /// An AI move was requested during the player's turn.
    #[display("It's not the AI's turn")]
    NotAisTurn,
    /// Cell index outside 0-8.
    #[display("Cell {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The AI picker produced no usable square.
    #[display("No move available for the AI")]
    NoMoveAvailable,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was placed on the board.
    Applied(Move),
    /// Preconditions failed; state is unchanged.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns the applied move, if any.
    pub fn applied(&self) -> Option<Move> {
        match self {
            MoveOutcome::Applied(m) => Some(*m),
            MoveOutcome::Ignored(_) => None,
        }
    }

    /// Returns true if the request changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}
