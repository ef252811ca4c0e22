//! Referee: move legality and game state
//!
//! The referee does not own the board or the figure fields. It reads them
//! for legality checks and is told about every accepted move so it can
//! declare a win or a draw.

use tracing::debug;

use crate::board::{Board, ByColor, Color, Pos};
use crate::error::MoveRejection;
use crate::eval::{FiguresAnalyser, MoveAnalysis};

use super::forbidden::forbidden_reason;
use super::win::is_winning_move;

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// `winner` is `None` for a draw
    Over { winner: Option<Color> },
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Referee {
    /// Color bound by the forbidden-move rules
    restricted: Color,
    status: GameStatus,
}

impl Referee {
    pub fn new(restricted: Color) -> Self {
        Self {
            restricted,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn restricted(&self) -> Color {
        self.restricted
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Winner of a finished game; `None` while playing or after a draw
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Over { winner } => winner,
            GameStatus::InProgress => None,
        }
    }

    /// Color expected to move next: Black opens, then colors alternate
    pub fn expected_color(board: &Board) -> Color {
        board
            .last_move()
            .map_or(Color::Black, |mv| mv.color.opponent())
    }

    /// Check whether `color` may play at `pos`.
    ///
    /// Checks run in order and stop at the first refusal: game over, bounds,
    /// occupancy, turn (skipped with `ignore_turn`), then the forbidden
    /// patterns, which apply to the restricted color only.
    ///
    /// # Arguments
    /// * `board` - Current board state
    /// * `analysers` - Figure fields of both colors, in step with `board`
    /// * `pos` - Candidate cell
    /// * `color` - Color that would play there
    /// * `ignore_turn` - Ask whether the cell is legal regardless of whose turn it is
    pub fn check_move(
        &self,
        board: &Board,
        analysers: &ByColor<FiguresAnalyser>,
        pos: Pos,
        color: Color,
        ignore_turn: bool,
    ) -> Result<(), MoveRejection> {
        if self.is_game_over() {
            return Err(MoveRejection::GameOver);
        }
        if !board.contains(pos) {
            return Err(MoveRejection::OutOfBounds {
                col: pos.col.into(),
                row: pos.row.into(),
                size: board.size(),
            });
        }
        if !board.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }
        if !ignore_turn && color != Self::expected_color(board) {
            return Err(MoveRejection::NotYourTurn(color));
        }
        if color == self.restricted {
            if let Some(reason) = forbidden_reason(&analysers[color].figures_at(pos)) {
                return Err(reason);
            }
        }
        Ok(())
    }

    /// Boolean form of [`Referee::check_move`]
    #[inline]
    pub fn move_allowed(
        &self,
        board: &Board,
        analysers: &ByColor<FiguresAnalyser>,
        pos: Pos,
        color: Color,
        ignore_turn: bool,
    ) -> bool {
        self.check_move(board, analysers, pos, color, ignore_turn)
            .is_ok()
    }

    /// Update the game state after an accepted move.
    ///
    /// `analysis` is the mover's own analysis of the move, so its figures are
    /// the ones the new stone formed. A win is checked before a draw; once
    /// the game is over the status never changes again.
    pub fn on_move_analysed(&mut self, board: &Board, analysis: &MoveAnalysis) -> GameStatus {
        if self.is_game_over() {
            return self.status;
        }

        let mover = analysis.mv.color;
        if is_winning_move(&analysis.figures, mover, self.restricted) {
            debug!(mv = %analysis.mv, "winning move");
            self.status = GameStatus::Over {
                winner: Some(mover),
            };
        } else if board.is_full() {
            debug!(mv = %analysis.mv, "board full without a five");
            self.status = GameStatus::Over { winner: None };
        }
        self.status
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(Color::Black)
    }
}
