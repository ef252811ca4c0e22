//! Game configuration
//!
//! Values come from defaults, then environment variables, then CLI flags.

use std::env;
use std::time::Duration;

use crate::board::{Color, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Pause a computer player takes before committing its move
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(300);

/// Who sits at each color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human against the computer
    #[default]
    PvE,
    /// Two humans on one board (hotseat)
    PvP,
    /// Computer against itself
    AiVsAi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Color bound by the forbidden-move rules
    pub restricted: Color,
    pub ai_delay: Duration,
    pub mode: GameMode,
    /// Human's color in `PvE`
    pub human_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            restricted: Color::Black,
            ai_delay: DEFAULT_AI_DELAY,
            mode: GameMode::PvE,
            human_color: Color::Black,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `RENJU_BOARD_SIZE`, `RENJU_RESTRICTED` and
    /// `RENJU_AI_DELAY_MS`. Unparsable values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            board_size: env::var("RENJU_BOARD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.board_size),
            restricted: env::var("RENJU_RESTRICTED")
                .ok()
                .and_then(|v| parse_color(&v).ok())
                .unwrap_or(defaults.restricted),
            ai_delay: env::var("RENJU_AI_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map_or(defaults.ai_delay, Duration::from_millis),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

/// Parse `black` or `white`, ignoring case
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Color::Black),
        "white" | "w" => Ok(Color::White),
        _ => Err(ConfigError::UnknownColor(s.to_string())),
    }
}
