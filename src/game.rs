//! Game driver: two players and one session
//!
//! `Game::try_proceed_move` plays exactly one ply. Everything that happens
//! is queued as a [`GameEvent`] in order, for the view to drain.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::board::{ByColor, Color, Move, Pos};
use crate::config::{GameConfig, GameMode};
use crate::error::MoveRejection;
use crate::player::{ComputerPlayer, HumanPlayer, Player};
use crate::rules::GameStatus;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied(Move),
    MoveRejected {
        color: Color,
        pos: Pos,
        reason: MoveRejection,
    },
    /// `winner` is `None` for a draw
    GameOver { winner: Option<Color> },
}

pub struct Game {
    session: Session,
    players: ByColor<Box<dyn Player>>,
    events: VecDeque<GameEvent>,
}

impl Game {
    /// Start a game on `session` and tell both players their colors
    pub fn new(session: Session, black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        let mut players = ByColor::new(black, white);
        for (color, player) in players.iter_mut() {
            player.start_game(color, &session);
        }
        info!(
            size = session.board().size(),
            restricted = %session.referee().restricted(),
            black = players[Color::Black].name(),
            white = players[Color::White].name(),
            "game started"
        );
        Self {
            session,
            players,
            events: VecDeque::new(),
        }
    }

    /// Fresh game with players seated according to `config.mode`
    pub fn from_config(config: &GameConfig) -> Self {
        let human = |name: &str| -> Box<dyn Player> { Box::new(HumanPlayer::new(name)) };
        let computer =
            |name: &str| -> Box<dyn Player> { Box::new(ComputerPlayer::new(name, config.ai_delay)) };

        let (black, white) = match config.mode {
            GameMode::PvE => match config.human_color {
                Color::Black => (human("Player"), computer("Computer")),
                Color::White => (computer("Computer"), human("Player")),
            },
            GameMode::PvP => (human("Black"), human("White")),
            GameMode::AiVsAi => (computer("Computer 1"), computer("Computer 2")),
        };
        Self::new(Session::from_config(config), black, white)
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn current_color(&self) -> Color {
        self.session.current_color()
    }

    #[inline]
    pub fn player(&self, color: Color) -> &dyn Player {
        self.players[color].as_ref()
    }

    /// Whether the side to move takes its moves from `submit`
    pub fn is_interactive_turn(&self) -> bool {
        !self.is_game_over() && self.players[self.current_color()].is_interactive()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Hand a chosen cell to the player whose turn it is
    pub fn submit(&mut self, pos: Pos) {
        let color = self.current_color();
        self.players[color].submit(pos);
    }

    /// Ask the current player for a move and apply it if the referee agrees.
    ///
    /// Returns `true` if a stone was placed. A refused proposal is queued as
    /// `MoveRejected` and leaves the session unchanged; after the game is over
    /// every proposal is refused.
    pub fn try_proceed_move(&mut self) -> bool {
        let color = self.current_color();
        let Some(pos) = self.players[color].try_proceed_move(&self.session) else {
            return false;
        };

        match self.session.play(pos, color) {
            Ok(outcome) => {
                self.events.push_back(GameEvent::MoveApplied(outcome.mv));
                if let GameStatus::Over { winner } = outcome.status {
                    self.events.push_back(GameEvent::GameOver { winner });
                }
                true
            }
            Err(reason) => {
                debug!(%color, %pos, %reason, "move rejected");
                self.events
                    .push_back(GameEvent::MoveRejected { color, pos, reason });
                false
            }
        }
    }

    /// Proceed until the game ends or the side to move produces nothing.
    ///
    /// Meant for games between computer players; a human seat stops the loop
    /// at its first turn.
    pub fn play_out(&mut self) -> GameStatus {
        while self.try_proceed_move() {}
        self.status()
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}
