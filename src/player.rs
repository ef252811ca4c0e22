//! Players that supply moves to a game
//!
//! A player only proposes a cell. The game validates the proposal with the
//! referee and applies it, so a player never mutates the session.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::board::{Color, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::session::Session;

pub trait Player {
    fn name(&self) -> &str;

    /// Color assigned at the last `start_game`
    fn color(&self) -> Color;

    /// Called once when a game begins
    fn start_game(&mut self, color: Color, session: &Session);

    /// Propose a cell for the current turn, or `None` if the player has
    /// nothing to play yet (a human who has not clicked).
    fn try_proceed_move(&mut self, session: &Session) -> Option<Pos>;

    /// Queue a cell chosen outside the game loop. Ignored by players that
    /// choose their own moves.
    fn submit(&mut self, _pos: Pos) {}

    /// Whether moves come from `submit`
    fn is_interactive(&self) -> bool {
        false
    }

    /// Statistics of the last engine selection, for players that use one
    fn last_result(&self) -> Option<&MoveResult> {
        None
    }
}

/// Player driven by clicks or typed moves
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    color: Color,
    pending: Option<Pos>,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: Color::Black,
            pending: None,
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn start_game(&mut self, color: Color, _session: &Session) {
        self.color = color;
        self.pending = None;
    }

    fn try_proceed_move(&mut self, _session: &Session) -> Option<Pos> {
        self.pending.take()
    }

    fn submit(&mut self, pos: Pos) {
        self.pending = Some(pos);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Player backed by [`AIEngine`]
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    color: Color,
    engine: AIEngine,
    /// Pause before answering; zero for headless play
    delay: Duration,
    last_result: Option<MoveResult>,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            color: Color::White,
            engine: AIEngine::new(),
            delay,
            last_result: None,
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn start_game(&mut self, color: Color, _session: &Session) {
        self.color = color;
        self.last_result = None;
    }

    fn try_proceed_move(&mut self, session: &Session) -> Option<Pos> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let result = self.engine.get_move_with_stats(session, self.color);
        debug!(player = %self.name, ?result, "computer move");
        let pos = result.best_move;
        self.last_result = Some(result);
        pos
    }

    fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}
