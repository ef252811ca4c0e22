//! Error types

use thiserror::Error;

use crate::board::{Color, Pos};

/// Why a move was refused.
///
/// Refusals are ordinary game events: the caller picks another cell or ends
/// the game. `Display` gives the reason shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("game is over")]
    GameOver,
    #[error("cell ({col}, {row}) is outside the {size}x{size} board")]
    OutOfBounds { col: i32, row: i32, size: usize },
    #[error("cell {0} is occupied")]
    Occupied(Pos),
    #[error("it is not {0}'s turn")]
    NotYourTurn(Color),
    #[error("double-three")]
    DoubleThree,
    #[error("double-four")]
    DoubleFour,
    #[error("overline")]
    Overline,
}

impl MoveRejection {
    /// Forbidden pattern for the restricted color, as opposed to a plain
    /// validation failure
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            MoveRejection::DoubleThree | MoveRejection::DoubleFour | MoveRejection::Overline
        )
    }
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    BoardSize { size: usize, min: usize, max: usize },
    #[error("unknown color {0:?}, expected \"black\" or \"white\"")]
    UnknownColor(String),
}
