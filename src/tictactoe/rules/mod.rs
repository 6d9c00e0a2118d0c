//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the engine so they can be tested and reused on arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, completes_line};

use super::{Board, Mark, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// A player line is checked before an AI line, so `PlayerWin` wins the
/// tie when both sides somehow hold a line. Without a line the result is
/// `Draw` on a full board and `InProgress` otherwise.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board) -> Outcome {
    for mark in [Mark::Player, Mark::Ai] {
        if completes_line(board, mark) {
            return Outcome::win_for(mark);
        }
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
