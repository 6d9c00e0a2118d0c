//! Exactly one mark is placed per move, by the side whose turn it was.

use super::{Invariant, Transition};
use crate::tictactoe::{Position, Square};

/// Invariant: one empty square became the mover's mark and nothing else changed.
pub struct SingleMoveInvariant;

impl Invariant<Transition> for SingleMoveInvariant {
    fn holds(t: &Transition) -> bool {
        let changed: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|&pos| t.before.board().get(pos) != t.after.board().get(pos))
            .collect();

        match changed.as_slice() {
            [pos] => {
                t.before.board().get(*pos) == Square::Empty
                    && t.after.board().get(*pos) == Square::Occupied(t.mover)
                    && t.before.turn().mark() == t.mover
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Exactly one empty square is claimed per move by the side to move"
    }
}
