//! Game state management for the Renju GUI

use std::time::{Duration, Instant};

use crate::{
    AIEngine, Color, Game, GameConfig, GameEvent, GameMode, GameStatus, Move, MoveResult, Pos,
};

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub move_log: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<Vec<Pos>>,
    pub message: Option<String>,
}

impl GameState {
    /// The GUI paces computer moves itself, so players are built without
    /// their own delay and the configured delay is applied between frames.
    pub fn new(config: GameConfig) -> Self {
        let game = Game::from_config(&GameConfig {
            ai_delay: Duration::ZERO,
            ..config.clone()
        });
        Self {
            game,
            config,
            move_log: Vec::new(),
            last_ai_result: None,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            winning_line: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Start over with other players seated
    pub fn new_game(&mut self, mode: GameMode, human_color: Color) {
        self.config.mode = mode;
        self.config.human_color = human_color;
        self.reset();
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.game.current_color()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Check if a computer player is to move
    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && !self.game.is_interactive_turn()
    }

    /// Time left before the computer may answer
    pub fn ai_wait_remaining(&self) -> Duration {
        self.config.ai_delay.saturating_sub(self.move_timer.elapsed())
    }

    /// Hand a clicked cell to the human player to move
    pub fn try_place_stone(&mut self, pos: Pos) {
        if self.is_game_over() {
            self.message = Some("Game is over".to_string());
            return;
        }
        if !self.game.is_interactive_turn() {
            self.message = Some("Not your turn".to_string());
            return;
        }
        self.game.submit(pos);
        self.game.try_proceed_move();
        self.process_events();
    }

    /// Let the computer move once its pacing delay has passed
    pub fn update_ai(&mut self) {
        if !self.is_ai_turn() || !self.ai_wait_remaining().is_zero() {
            return;
        }
        let color = self.current_turn();
        let moved = self.game.try_proceed_move();
        self.last_ai_result = self.game.player(color).last_result().cloned();
        if !moved && !self.is_game_over() {
            self.message = Some(format!("{color} has no legal move"));
        }
        self.process_events();
    }

    /// Apply queued game events to the view state
    fn process_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::MoveApplied(mv) => {
                    self.move_log.push(mv);
                    self.suggested_move = None;
                    self.message = None;
                    self.move_timer.stop();
                    self.move_timer.start();
                }
                GameEvent::MoveRejected { color, pos, reason } => {
                    self.message = Some(format!("{color} cannot play {pos}: {reason}"));
                }
                GameEvent::GameOver { winner } => {
                    self.move_timer.stop();
                    self.winning_line = self.game.session().winning_line();
                    self.message = Some(match winner {
                        Some(color) => format!("{color} wins"),
                        None => "Draw".to_string(),
                    });
                }
            }
        }
    }

    /// How the game ended: five, overline or a full board
    pub fn result_detail(&self) -> Option<&'static str> {
        let GameStatus::Over { winner } = self.game.status() else {
            return None;
        };
        Some(match (winner, &self.winning_line) {
            (None, _) => "the board is full",
            (Some(_), Some(line)) if line.len() > 5 => "by overline",
            (Some(_), _) => "by five in a row",
        })
    }

    /// Suggest a cell for the side to move without playing it
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() {
            return;
        }
        let result = AIEngine::new().get_move_with_stats(self.game.session(), self.current_turn());
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }
}
