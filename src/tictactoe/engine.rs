//! Game engine for a human playing against the computer.
//!
//! The engine owns the board, the turn flag and the outcome. Requests that
//! break a precondition are ignored rather than treated as errors; the
//! returned [`MoveOutcome`] says why.

use super::action::{Move, MoveOutcome, Rejection};
use super::ai::{MovePicker, RandomPicker};
#[cfg(debug_assertions)]
use super::invariants::{EngineInvariants, InvariantSet, Transition};
use super::rules::check_outcome;
use super::{Board, GameSnapshot, Mark, Outcome, Position, Square, Turn};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe engine: player moves first, the AI answers.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    turn: Turn,
    outcome: Outcome,
    history: Vec<Move>,
    picker: Box<dyn MovePicker>,
}

impl GameEngine {
    /// Creates an engine whose AI picks uniformly random squares.
    #[instrument]
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker::new()))
    }

    /// Creates an engine with the given AI strategy.
    #[instrument(skip(picker), fields(picker = picker.name()))]
    pub fn with_picker(picker: Box<dyn MovePicker>) -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            picker,
        }
    }

    /// Places the player's mark at `cell_index` (0-8).
    ///
    /// Ignored unless the game is ongoing, it is the player's turn, the
    /// index is on the board and the square is empty.
    #[instrument(skip(self), fields(turn = %self.turn, outcome = %self.outcome))]
    pub fn apply_player_move(&mut self, cell_index: usize) -> MoveOutcome {
        if self.outcome.is_over() {
            return ignored(Rejection::GameOver);
        }
        if self.turn != Turn::Player {
            return ignored(Rejection::NotPlayersTurn);
        }
        let Some(position) = Position::from_index(cell_index) else {
            return ignored(Rejection::OutOfBounds(cell_index));
        };
        if !self.board.is_empty(position) {
            return ignored(Rejection::SquareOccupied(position));
        }

        MoveOutcome::Applied(self.place(Move::new(Mark::Player, position)))
    }

    /// Lets the AI claim an empty square chosen by its picker.
    ///
    /// Ignored unless the game is ongoing and it is the AI's turn.
    #[instrument(skip(self), fields(turn = %self.turn, outcome = %self.outcome))]
    pub fn apply_ai_move(&mut self) -> MoveOutcome {
        if self.outcome.is_over() {
            return ignored(Rejection::GameOver);
        }
        if self.turn != Turn::Ai {
            return ignored(Rejection::NotAisTurn);
        }

        match self.picker.pick(&self.board) {
            Some(position) if self.board.is_empty(position) => {
                MoveOutcome::Applied(self.place(Move::new(Mark::Ai, position)))
            }
            Some(position) => {
                error!(picker = self.picker.name(), %position, "Picker chose an occupied square");
                ignored(Rejection::SquareOccupied(position))
            }
            None => ignored(Rejection::NoMoveAvailable),
        }
    }

    /// Clears the board and hands the first move back to the player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Turn::Player;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        info!("Game reset");
    }

    /// Returns a copy of the board, turn and outcome.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.board, self.turn, self.outcome)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose move is expected.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Returns moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Returns the AI picker's name.
    pub fn picker_name(&self) -> &str {
        self.picker.name()
    }

    /// Applies a pre-validated move, flips the turn and recomputes the outcome.
    fn place(&mut self, action: Move) -> Move {
        #[cfg(debug_assertions)]
        let before = self.snapshot();

        self.board.set(action.position, Square::Occupied(action.mark));
        self.history.push(action);
        self.turn = self.turn.next();
        self.outcome = check_outcome(&self.board);

        debug!(%action, outcome = %self.outcome, "Move applied");
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }

        #[cfg(debug_assertions)]
        self.check_invariants(Transition::new(before, self.snapshot(), action.mark));

        action
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self, transition: Transition) {
        if let Err(violations) = EngineInvariants::check_all(&transition) {
            for violation in &violations {
                error!(%violation, ?transition, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "engine invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn ignored(reason: Rejection) -> MoveOutcome {
    debug!(%reason, "Move ignored");
    MoveOutcome::Ignored(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::ai::FirstAvailable;

    fn engine() -> GameEngine {
        GameEngine::with_picker(Box::new(FirstAvailable))
    }

    #[test]
    fn test_new_engine_waits_for_player() {
        let engine = engine();
        assert_eq!(engine.snapshot(), GameSnapshot::default());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_player_move_flips_turn() {
        let mut engine = engine();
        let result = engine.apply_player_move(4);
        assert_eq!(
            result,
            MoveOutcome::Applied(Move::new(Mark::Player, Position::Center))
        );
        assert_eq!(engine.turn(), Turn::Ai);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_ai_move_ignored_on_player_turn() {
        let mut engine = engine();
        assert_eq!(
            engine.apply_ai_move(),
            MoveOutcome::Ignored(Rejection::NotAisTurn)
        );
        assert_eq!(engine.snapshot(), GameSnapshot::default());
    }

    #[test]
    fn test_player_move_ignored_on_ai_turn() {
        let mut engine = engine();
        engine.apply_player_move(0);
        let before = engine.snapshot();
        assert_eq!(
            engine.apply_player_move(1),
            MoveOutcome::Ignored(Rejection::NotPlayersTurn)
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut engine = engine();
        assert_eq!(
            engine.apply_player_move(9),
            MoveOutcome::Ignored(Rejection::OutOfBounds(9))
        );
        assert_eq!(engine.turn(), Turn::Player);
    }

    #[test]
    fn test_ai_uses_picker_choice() {
        let mut engine = engine();
        engine.apply_player_move(0);
        let result = engine.apply_ai_move();
        assert_eq!(
            result.applied(),
            Some(Move::new(Mark::Ai, Position::TopCenter))
        );
        assert_eq!(engine.turn(), Turn::Player);
    }

    #[derive(Debug)]
    struct Stubborn;

    impl MovePicker for Stubborn {
        fn pick(&mut self, _board: &Board) -> Option<Position> {
            Some(Position::TopLeft)
        }

        fn name(&self) -> &str {
            "stubborn"
        }
    }

    #[test]
    fn test_picker_choosing_occupied_square_is_ignored() {
        let mut engine = GameEngine::with_picker(Box::new(Stubborn));
        engine.apply_player_move(0);
        let before = engine.snapshot();
        assert_eq!(
            engine.apply_ai_move(),
            MoveOutcome::Ignored(Rejection::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut engine = engine();
        engine.apply_player_move(0);
        engine.apply_ai_move();
        engine.reset();
        assert!(engine.history().is_empty());
        assert_eq!(engine.snapshot(), GameSnapshot::default());
    }
}
