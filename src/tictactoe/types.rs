//! Core domain types for tic-tac-toe against the computer.

use super::position::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Which side placed a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The human player (always moves first).
    #[display("Player")]
    Player,
    /// The computer opponent.
    #[display("AI")]
    Ai,
}

impl Mark {
    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Ai => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by one side.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(mark) => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("expected 9 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// Unrecognised cell character.
    #[display("invalid cell character '{_0}'")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`P` mark the player, `O`/`A` the AI, `.`/`_`/`-` an empty
    /// square. Whitespace and `|` separators are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' | 'P' => Ok(Square::Occupied(Mark::Player)),
                'O' | 'A' => Ok(Square::Occupied(Mark::Ai)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(ParseBoardError::InvalidCharacter(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Whose move is currently expected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Turn {
    /// Waiting for the human player.
    #[default]
    #[display("Player's turn")]
    Player,
    /// Waiting for the computer.
    #[display("AI's turn")]
    Ai,
}

impl Turn {
    /// The mark placed by whoever holds this turn.
    pub fn mark(self) -> Mark {
        match self {
            Turn::Player => Mark::Player,
            Turn::Ai => Mark::Ai,
        }
    }

    /// The turn after this one.
    pub fn next(self) -> Self {
        match self {
            Turn::Player => Turn::Ai,
            Turn::Ai => Turn::Player,
        }
    }
}

/// Result classification of the game.
///
/// `InProgress` while the game is ongoing; any other value is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    #[display("In progress")]
    InProgress,
    /// The player completed a line.
    #[display("Player has won")]
    PlayerWin,
    /// The AI completed a line.
    #[display("AI has won")]
    AiWin,
    /// Board full with no line.
    #[display("Game draw")]
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::AiWin => Some(Mark::Ai),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Outcome for a side completing a line.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Ai => Outcome::AiWin,
        }
    }
}

/// Read-only copy of everything a UI renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Getters, derive_new::new, Serialize, Deserialize,
)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Whose move is expected.
    turn: Turn,
    /// Current outcome.
    outcome: Outcome,
}

impl GameSnapshot {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_numbers_and_marks() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_rejects_short_board() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongLength(2));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let err = "XO? ... ...".parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::InvalidCharacter('?'));
    }

    #[test]
    fn test_turn_alternates() {
        assert_eq!(Turn::Player.next(), Turn::Ai);
        assert_eq!(Turn::Ai.next(), Turn::Player);
        assert_eq!(Turn::Ai.mark(), Mark::Ai);
    }

    #[test]
    fn test_outcome_terminal_classification() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Draw.is_over());
        assert_eq!(Outcome::AiWin.winner(), Some(Mark::Ai));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
