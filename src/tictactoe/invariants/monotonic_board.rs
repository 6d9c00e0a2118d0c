//! Monotonic board invariant: squares never change once set.

use super::{Invariant, Transition};
use crate::tictactoe::{Position, Square};

/// Invariant: no occupied square changes during a move.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition> for MonotonicBoardInvariant {
    fn holds(t: &Transition) -> bool {
        Position::ALL.iter().all(|&pos| {
            let before = t.before.board().get(pos);
            before == Square::Empty || before == t.after.board().get(pos)
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, GameSnapshot, Mark, Outcome, Turn};

    fn transition(before: &str, after: &str) -> Transition {
        Transition::new(
            GameSnapshot::new(before.parse::<Board>().unwrap(), Turn::Player, Outcome::InProgress),
            GameSnapshot::new(after.parse::<Board>().unwrap(), Turn::Ai, Outcome::InProgress),
            Mark::Player,
        )
    }

    #[test]
    fn test_adding_a_mark_holds() {
        assert!(MonotonicBoardInvariant::holds(&transition("O.. ... ...", "O.. .X. ...")));
    }

    #[test]
    fn test_overwrite_violates() {
        assert!(!MonotonicBoardInvariant::holds(&transition("O.. ... ...", "X.. ... ...")));
    }

    #[test]
    fn test_clearing_violates() {
        assert!(!MonotonicBoardInvariant::holds(&transition("O.. ... ...", "... ... ...")));
    }
}
