//! Alternating turn invariant: player, AI, player, ...

use super::{Invariant, Transition};

/// Invariant: the side that moved held the turn, and the turn passed to
/// the other side.
pub struct AlternatingTurnInvariant;

impl Invariant<Transition> for AlternatingTurnInvariant {
    fn holds(t: &Transition) -> bool {
        t.before.turn().mark() == t.mover && *t.after.turn() == t.before.turn().next()
    }

    fn description() -> &'static str {
        "Sides alternate and only the side holding the turn moves"
    }
}
