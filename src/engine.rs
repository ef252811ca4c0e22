//! AI engine: greedy one-ply move selection
//!
//! The engine reads both colors' weight fields and asks the referee which
//! cells are legal. Selection follows this priority:
//!
//! 1. **Immediate win**: a legal cell where the mover completes a winning line
//! 2. **Weighted**: the legal cell with the highest combined score
//! 3. **Center fallback**: with no scored cell, the legal cell nearest the center
//!
//! A cell's combined score is the mover's own weight plus the opponent's
//! weight when the opponent could legally play there, so urgent blocks rank
//! alongside the mover's own threats. Ties go to the cell nearest the center,
//! then to the first cell in row-major order.
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, Color, Pos, Session};
//!
//! let mut session = Session::new(15, Color::Black);
//! session.play(Pos::new(7, 7), Color::Black).unwrap();
//!
//! let result = AIEngine::new().get_move_with_stats(&session, Color::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Color, Pos};
use crate::rules::is_winning_move;
use crate::session::Session;

/// Which selection step produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a move that completes a winning line
    ImmediateWin,
    /// Highest combined weight
    Weighted,
    /// Nothing scored; nearest legal cell to the center
    CenterFallback,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Selected cell; `None` when no legal cell exists
    pub best_move: Option<Pos>,
    /// Combined weight of the selected cell
    pub score: u32,
    pub search_type: SearchType,
    /// Legal cells considered
    pub evaluated: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Greedy Renju engine.
///
/// Stateless: every call reads the session as it is and never mutates it,
/// so the same engine serves both players and move hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct AIEngine;

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Best cell for `color`, or `None` if it has no legal cell
    #[must_use]
    pub fn get_move(&self, session: &Session, color: Color) -> Option<Pos> {
        self.get_move_with_stats(session, color).best_move
    }

    /// Select a move for `color` and report how it was found.
    ///
    /// Only cells the referee allows for `color` on its own turn are
    /// candidates; when it is not `color`'s turn (hints, tests) the turn
    /// check is skipped.
    #[must_use]
    pub fn get_move_with_stats(&self, session: &Session, color: Color) -> MoveResult {
        let start = Instant::now();
        let board = session.board();
        let opponent = color.opponent();
        let restricted = session.referee().restricted();
        let ignore_turn = session.current_color() != color;
        let center = center(board.size());

        let own = session.weights(color);
        let theirs = session.weights(opponent);
        let figures = session.analyser(color);

        let mut evaluated = 0u32;
        let mut win: Option<Pos> = None;
        let mut best: Option<(u32, u32, Pos)> = None;

        for pos in board.cells() {
            if !session.move_allowed(pos, color, ignore_turn) {
                continue;
            }
            evaluated += 1;

            if win.is_none() && is_winning_move(&figures.figures_at(pos), color, restricted) {
                win = Some(pos);
            }

            let mut score = own.weight_at(pos);
            if session.move_allowed(pos, opponent, true) {
                score += theirs.weight_at(pos);
            }
            let distance = pos.distance(center);

            // cells are visited in row-major order, so a strict improvement
            // keeps the earliest cell among equals
            let better = match best {
                None => true,
                Some((s, d, _)) => score > s || (score == s && distance < d),
            };
            if better {
                best = Some((score, distance, pos));
            }
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let result = match (win, best) {
            (Some(pos), _) => MoveResult {
                best_move: Some(pos),
                score: own.weight_at(pos),
                search_type: SearchType::ImmediateWin,
                evaluated,
                time_ms,
            },
            (None, Some((score, _, pos))) => MoveResult {
                best_move: Some(pos),
                score,
                search_type: if score == 0 {
                    SearchType::CenterFallback
                } else {
                    SearchType::Weighted
                },
                evaluated,
                time_ms,
            },
            (None, None) => MoveResult {
                best_move: None,
                score: 0,
                search_type: SearchType::CenterFallback,
                evaluated,
                time_ms,
            },
        };

        debug!(
            %color,
            best = ?result.best_move,
            score = result.score,
            search = ?result.search_type,
            evaluated,
            "move selected"
        );
        result
    }
}

/// Center cell used for tie-breaks
#[inline]
fn center(size: usize) -> Pos {
    let c = (size / 2) as u8;
    Pos::new(c, c)
}
