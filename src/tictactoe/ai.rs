//! Move pickers for the computer opponent.

use super::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strategy that chooses the AI's next square.
pub trait MovePicker: Send + std::fmt::Debug {
    /// Chooses an empty position, or `None` when the board has none.
    fn pick(&mut self, board: &Board) -> Option<Position>;

    /// Returns the picker's display name.
    fn name(&self) -> &str;
}

/// Picks uniformly among the empty squares.
///
/// Collecting the empty squares first gives the same distribution as
/// redrawing until an empty index turns up, with bounded work.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Creates a picker seeded from system entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible picker.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePicker for RandomPicker {
    #[instrument(skip_all)]
    fn pick(&mut self, board: &Board) -> Option<Position> {
        let choice = Position::valid_moves(board).choose(&mut self.rng).copied();
        debug!(?choice, "Random picker chose");
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Picks the lowest-numbered empty square.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MovePicker for FirstAvailable {
    fn pick(&mut self, board: &Board) -> Option<Position> {
        Position::ALL.iter().copied().find(|&pos| board.is_empty(pos))
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Selectable picker strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PickerKind {
    /// Uniformly random empty square.
    #[default]
    Random,
    /// Lowest-numbered empty square.
    First,
}

impl PickerKind {
    /// Builds a boxed picker; `seed` only affects the random strategy.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn MovePicker> {
        match self {
            PickerKind::Random => {
                Box::new(seed.map_or_else(RandomPicker::new, RandomPicker::seeded))
            }
            PickerKind::First => Box::new(FirstAvailable),
        }
    }
}
