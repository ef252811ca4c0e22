//! Forbidden move rules for the restricted color
//!
//! A move is forbidden when the figures it forms at its cell include:
//! - two or more open threes (double-three)
//! - two or more open fours (double-four)
//! - an overline
//!
//! Exception: a move that also forms a five is always allowed and wins.
//!
//! All checks read the restricted color's figure field at the candidate cell,
//! which already holds the figures a stone there would form.

use crate::error::MoveRejection;
use crate::eval::{CellFigures, FigureType};

/// Count how many directions would hold an open three
#[inline]
pub fn count_open_threes(figures: &CellFigures) -> usize {
    figures.count(FigureType::OpenThree)
}

/// Count how many directions would hold an open four
#[inline]
pub fn count_open_fours(figures: &CellFigures) -> usize {
    figures.count(FigureType::OpenFour)
}

#[inline]
pub fn is_double_three(figures: &CellFigures) -> bool {
    count_open_threes(figures) >= 2
}

#[inline]
pub fn is_double_four(figures: &CellFigures) -> bool {
    count_open_fours(figures) >= 2
}

#[inline]
pub fn is_overline(figures: &CellFigures) -> bool {
    figures.contains(FigureType::SixOrMore)
}

/// Forbidden pattern formed by these figures, if any.
///
/// # Returns
/// `None` when the move is allowed, including every move that forms a five.
pub fn forbidden_reason(figures: &CellFigures) -> Option<MoveRejection> {
    if figures.contains(FigureType::Five) {
        return None;
    }
    if is_double_three(figures) {
        Some(MoveRejection::DoubleThree)
    } else if is_double_four(figures) {
        Some(MoveRejection::DoubleFour)
    } else if is_overline(figures) {
        Some(MoveRejection::Overline)
    } else {
        None
    }
}
