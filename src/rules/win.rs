//! Win condition checking for Renju
//!
//! A move wins when the figures it formed include a five. For the color
//! without forbidden moves an overline wins as well; for the restricted
//! color an overline never reaches this check because the referee refuses
//! it first.

use crate::board::{Board, Color, Direction, Pos};
use crate::eval::{CellFigures, FigureType};

/// Check whether the figures a move formed complete a winning line.
///
/// # Arguments
/// * `figures` - Mover's figures at the moved cell, taken just before it was cleared
/// * `color` - Color of the mover
/// * `restricted` - The color bound by forbidden-move rules
#[inline]
pub fn is_winning_move(figures: &CellFigures, color: Color, restricted: Color) -> bool {
    figures.contains(FigureType::Five)
        || (color != restricted && figures.contains(FigureType::SixOrMore))
}

/// Stones of `color` in the longest run of five or more through `pos`.
///
/// Returns the run ordered along its direction, or `None` when no direction
/// holds five in a row. Used to highlight a finished game's winning line.
pub fn find_five_line(board: &Board, pos: Pos, color: Color) -> Option<Vec<Pos>> {
    let stone = color.stone();
    if board.get(pos) != stone {
        return None;
    }
    let size = board.size();

    Direction::ALL
        .into_iter()
        .map(|direction| {
            let (dc, dr) = direction.delta();
            let mut line = vec![pos];

            // Extend in negative direction first
            let (mut col, mut row) = (pos.col as i32 - dc, pos.row as i32 - dr);
            while let Some(prev) = Pos::checked(col, row, size) {
                if board.get(prev) != stone {
                    break;
                }
                line.insert(0, prev);
                col -= dc;
                row -= dr;
            }

            // Extend in positive direction
            let (mut col, mut row) = (pos.col as i32 + dc, pos.row as i32 + dr);
            while let Some(next) = Pos::checked(col, row, size) {
                if board.get(next) != stone {
                    break;
                }
                line.push(next);
                col += dc;
                row += dr;
            }
            line
        })
        .filter(|line| line.len() >= 5)
        .max_by_key(Vec::len)
}
