//! Headless batches of random-versus-random games.

use crate::tictactoe::{GameEngine, MovePicker, Outcome, RandomPicker, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Games played.
    pub games: u64,
    /// Games won by the player side.
    pub player_wins: u64,
    /// Games won by the AI.
    pub ai_wins: u64,
    /// Drawn games.
    pub draws: u64,
}

impl Tally {
    /// Records one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::AiWin => self.ai_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        self.games += 1;
    }
}

/// Plays `games` games where both sides pick random squares.
///
/// With a seed the whole batch is reproducible: the AI uses `seed` and the
/// player side uses the next seed up.
#[instrument]
pub fn simulate(games: u64, seed: Option<u64>) -> Tally {
    let (ai, mut player) = match seed {
        Some(seed) => (
            RandomPicker::seeded(seed),
            RandomPicker::seeded(seed.wrapping_add(1)),
        ),
        None => (RandomPicker::new(), RandomPicker::new()),
    };
    let mut engine = GameEngine::with_picker(Box::new(ai));
    let mut tally = Tally::default();

    for game in 0..games {
        engine.reset();
        while !engine.is_over() {
            let result = match engine.turn() {
                Turn::Player => match player.pick(engine.board()) {
                    Some(pos) => engine.apply_player_move(pos.to_index()),
                    None => break,
                },
                Turn::Ai => engine.apply_ai_move(),
            };
            if !result.is_applied() {
                warn!(game, ?result, "Simulated move was ignored");
                break;
            }
        }
        debug!(game, outcome = %engine.outcome(), "Simulated game finished");
        tally.record(engine.outcome());
    }

    info!(?tally, "Simulation complete");
    tally
}
