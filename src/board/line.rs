//! Projection of a board line through a cell onto a 1-D sequence

use super::{Board, Pos, Stone};

/// The four independent lines through any cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Step (dcol, drow) along the line
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::DiagonalDown => 2,
            Direction::DiagonalUp => 3,
        }
    }

    /// First cell of every line in this direction on a `size` board.
    /// Each cell of the board lies on exactly one of these lines.
    pub fn line_starts(self, size: usize) -> Vec<Pos> {
        let n = size as u8;
        match self {
            Direction::Horizontal => (0..n).map(|row| Pos::new(0, row)).collect(),
            Direction::Vertical => (0..n).map(|col| Pos::new(col, 0)).collect(),
            Direction::DiagonalDown => (0..n)
                .map(|col| Pos::new(col, 0))
                .chain((1..n).map(|row| Pos::new(0, row)))
                .collect(),
            Direction::DiagonalUp => (0..n)
                .map(|row| Pos::new(0, row))
                .chain((1..n).map(|col| Pos::new(col, n - 1)))
                .collect(),
        }
    }
}

/// Stones along one full board line, clipped at the edges, with the board
/// position of every line index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub direction: Direction,
    pub cells: Vec<Stone>,
    pub coords: Vec<Pos>,
}

impl Line {
    /// Project the whole line in `direction` that passes through `anchor`.
    pub fn through(board: &Board, anchor: Pos, direction: Direction) -> Self {
        let size = board.size();
        let (dc, dr) = direction.delta();

        // walk back to the board edge
        let (mut col, mut row) = (anchor.col as i32, anchor.row as i32);
        while Pos::is_valid(col - dc, row - dr, size) {
            col -= dc;
            row -= dr;
        }

        let mut cells = Vec::with_capacity(size);
        let mut coords = Vec::with_capacity(size);
        while let Some(pos) = Pos::checked(col, row, size) {
            cells.push(board.get(pos));
            coords.push(pos);
            col += dc;
            row += dr;
        }

        Self {
            direction,
            cells,
            coords,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
