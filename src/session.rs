//! One game's mutable state and its single move-acceptance path
//!
//! A `Session` owns the board, both colors' figure fields and weight fields,
//! and the referee. Every accepted move runs the same fixed sequence:
//!
//! 1. the stone is put on the board
//! 2. both analysers reclassify the four lines through it
//! 3. both weight fields rescore the affected cells
//! 4. the referee checks the mover's figures for a win, then the board for a draw
//! 5. the moved cell is cleared in every analyser and weight field
//!
//! Step 4 reads the figures at the moved cell before step 5 erases them.

use tracing::{debug, info};

use crate::board::{Board, ByColor, Color, Move, Pos};
use crate::config::GameConfig;
use crate::error::MoveRejection;
use crate::eval::{FiguresAnalyser, WeightField};
use crate::rules::{find_five_line, GameStatus, Referee};

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// Game status right after the move
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    analysers: ByColor<FiguresAnalyser>,
    weights: ByColor<WeightField>,
    referee: Referee,
}

impl Session {
    /// Fresh game on an empty `size` board.
    ///
    /// # Panics
    /// If `size` is not a supported board size.
    pub fn new(size: usize, restricted: Color) -> Self {
        Self {
            board: Board::new(size),
            analysers: ByColor::from_fn(|color| FiguresAnalyser::new(color, size)),
            weights: ByColor::from_fn(|color| WeightField::new(color, size)),
            referee: Referee::new(restricted),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, config.restricted)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn analyser(&self, color: Color) -> &FiguresAnalyser {
        &self.analysers[color]
    }

    #[inline]
    pub fn weights(&self, color: Color) -> &WeightField {
        &self.weights[color]
    }

    #[inline]
    pub fn referee(&self) -> &Referee {
        &self.referee
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.referee.status()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.referee.is_game_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.referee.winner()
    }

    /// Color whose turn it is
    #[inline]
    pub fn current_color(&self) -> Color {
        Referee::expected_color(&self.board)
    }

    /// Referee's verdict on `color` playing `pos`; never mutates anything
    pub fn check_move(&self, pos: Pos, color: Color, ignore_turn: bool) -> Result<(), MoveRejection> {
        self.referee
            .check_move(&self.board, &self.analysers, pos, color, ignore_turn)
    }

    /// [`Session::check_move`] for raw coordinates, which may be negative or
    /// beyond any board
    pub fn check_cell(
        &self,
        col: i32,
        row: i32,
        color: Color,
        ignore_turn: bool,
    ) -> Result<(), MoveRejection> {
        if self.is_game_over() {
            return Err(MoveRejection::GameOver);
        }
        let size = self.board.size();
        let pos =
            Pos::checked(col, row, size).ok_or(MoveRejection::OutOfBounds { col, row, size })?;
        self.check_move(pos, color, ignore_turn)
    }

    #[inline]
    pub fn move_allowed(&self, pos: Pos, color: Color, ignore_turn: bool) -> bool {
        self.check_move(pos, color, ignore_turn).is_ok()
    }

    /// Validate and apply a move for the color whose turn it is.
    ///
    /// A refused move leaves the session untouched.
    pub fn play(&mut self, pos: Pos, color: Color) -> Result<MoveOutcome, MoveRejection> {
        self.check_move(pos, color, false)?;
        Ok(self.put_stone(pos, color))
    }

    /// Apply a move without asking the referee.
    ///
    /// # Panics
    /// If the cell is off the board or occupied.
    pub fn put_stone(&mut self, pos: Pos, color: Color) -> MoveOutcome {
        let mv = self.board.put_stone(pos, color);

        let board = &self.board;
        let analysers = &mut self.analysers;
        let analyses = ByColor::from_fn(|c| analysers[c].analyse_move(board, mv));

        for (c, weights) in self.weights.iter_mut() {
            weights.apply(&analyses[c], &self.analysers[c]);
        }

        let status = self.referee.on_move_analysed(&self.board, &analyses[color]);

        for (_, analyser) in self.analysers.iter_mut() {
            analyser.clear_cell(pos);
        }
        for (_, weights) in self.weights.iter_mut() {
            weights.clear_cell(pos);
        }

        debug!(mv = %mv, figure = %analyses[color].figures.best(), "move applied");
        if let GameStatus::Over { winner } = status {
            match winner {
                Some(winner) => info!(%winner, moves = mv.seq, "game over"),
                None => info!(moves = mv.seq, "game drawn"),
            }
        }

        MoveOutcome { mv, status }
    }

    /// Stones of the winning run, once the game has a winner
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner()?;
        let last = self.board.last_move()?;
        find_five_line(&self.board, last.pos, winner)
    }

    /// Recompute every figure and weight field from the board alone
    pub fn rebuild(&mut self) {
        for (c, analyser) in self.analysers.iter_mut() {
            analyser.rebuild(&self.board);
            self.weights[c].rebuild(analyser);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
