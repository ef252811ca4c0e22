//! Game rules for Renju
//!
//! This module implements the rule set:
//! - Forbidden moves for the restricted color (double-three, double-four, overline)
//! - Win conditions (five in a row, overline for the unrestricted color)
//! - The referee that applies both and tracks the game status

pub mod forbidden;
pub mod referee;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{
    count_open_fours, count_open_threes, forbidden_reason, is_double_four, is_double_three,
    is_overline,
};
pub use referee::{GameStatus, Referee};
pub use win::{find_five_line, is_winning_move};
