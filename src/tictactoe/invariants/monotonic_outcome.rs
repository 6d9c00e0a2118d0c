//! Outcome never regresses.

use super::{Invariant, Transition};
use crate::tictactoe::rules::check_outcome;

/// Invariant: moves only happen in ongoing games and the recorded outcome
/// matches the board.
pub struct MonotonicOutcomeInvariant;

impl Invariant<Transition> for MonotonicOutcomeInvariant {
    fn holds(t: &Transition) -> bool {
        !t.before.is_over() && *t.after.outcome() == check_outcome(t.after.board())
    }

    fn description() -> &'static str {
        "Outcome is recomputed after each move and never regresses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, GameSnapshot, Mark, Outcome, Turn};

    fn snapshot(board: &str, turn: Turn, outcome: Outcome) -> GameSnapshot {
        GameSnapshot::new(board.parse::<Board>().unwrap(), turn, outcome)
    }

    #[test]
    fn test_winning_move_holds() {
        let t = Transition::new(
            snapshot("XX. OO. ...", Turn::Player, Outcome::InProgress),
            snapshot("XXX OO. ...", Turn::Ai, Outcome::PlayerWin),
            Mark::Player,
        );
        assert!(MonotonicOutcomeInvariant::holds(&t));
    }

    #[test]
    fn test_move_after_game_over_violates() {
        let t = Transition::new(
            snapshot("XXX OO. ...", Turn::Ai, Outcome::PlayerWin),
            snapshot("XXX OOO ...", Turn::Player, Outcome::PlayerWin),
            Mark::Ai,
        );
        assert!(!MonotonicOutcomeInvariant::holds(&t));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let t = Transition::new(
            snapshot("XX. OO. ...", Turn::Player, Outcome::InProgress),
            snapshot("XXX OO. ...", Turn::Ai, Outcome::InProgress),
            Mark::Player,
        );
        assert!(!MonotonicOutcomeInvariant::holds(&t));
    }
}
