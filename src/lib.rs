//! Renju engine with forbidden-move rules
//!
//! A Renju engine built around a line-figure classifier:
//! - 15x15 board by default, any size from 5x5 to 19x19
//! - Exactly five in a row wins
//! - Double-three, double-four and overline are forbidden for one color
//!   (Black by convention); a move that also makes a five is always allowed
//! - The other color may form overlines, which also win
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, colors, positions, line projection
//! - [`eval`]: Figure classification, per-color figure and weight fields
//! - [`rules`]: Forbidden moves, win detection, the referee
//! - [`session`]: One game's state and its move-acceptance path
//! - [`engine`]: Greedy AI move selection
//! - [`player`], [`game`]: Players and the ply-by-ply game driver
//! - [`config`], [`error`]: Configuration and error types
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, Color, Pos, Session};
//!
//! let mut session = Session::new(15, Color::Black);
//! session.play(Pos::new(7, 7), Color::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = AIEngine::new().get_move(&session, Color::White) {
//!     session.play(pos, Color::White).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, ByColor, Color, Move, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, GameMode};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, MoveRejection};
pub use eval::{CellFigures, FigureType};
pub use game::{Game, GameEvent};
pub use player::{ComputerPlayer, HumanPlayer, Player};
pub use rules::{GameStatus, Referee};
pub use session::{MoveOutcome, Session};
