//! Board representation for Renju

pub mod bitboard;
pub mod board;
pub mod line;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::{Index, IndexMut};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use line::{Direction, Line};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Largest supported board size (19x19)
pub const MAX_BOARD_SIZE: usize = 19;
/// Smallest board on which a five still fits
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent stone; `Empty` has none
    #[inline]
    pub fn opponent(self) -> Option<Stone> {
        self.color().map(|c| c.opponent().stone())
    }

    /// Color of the stone, `None` for an empty cell
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Stone::Black => Some(Color::Black),
            Stone::White => Some(Color::White),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// The two players' colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.pad("Black"),
            Color::White => f.pad("White"),
        }
    }
}

/// Per-color state kept side by side in a fixed array
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByColor<T>([T; 2]);

impl<T> ByColor<T> {
    pub fn new(black: T, white: T) -> Self {
        Self([black, white])
    }

    /// Build both entries from the color they belong to
    pub fn from_fn(mut f: impl FnMut(Color) -> T) -> Self {
        Self([f(Color::Black), f(Color::White)])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<Color> for ByColor<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        &self.0[color.index()]
    }
}

impl<T> IndexMut<Color> for ByColor<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        &mut self.0[color.index()]
    }
}

/// Position on the board, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    /// Any coordinates are accepted; whether they lie on a board is up to
    /// [`Board::contains`]
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Build a position from signed coordinates if it lies on a `size` board
    #[inline]
    pub fn checked(col: i32, row: i32, size: usize) -> Option<Self> {
        if Self::is_valid(col, row, size) {
            Some(Self { col: col as u8, row: row as u8 })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32, size: usize) -> bool {
        col >= 0 && col < size as i32 && row >= 0 && row < size as i32
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            col: (idx % size) as u8,
            row: (idx / size) as u8,
        }
    }

    /// Manhattan distance between two positions
    #[inline]
    pub fn distance(self, other: Pos) -> u32 {
        (self.col as i32 - other.col as i32).unsigned_abs()
            + (self.row as i32 - other.row as i32).unsigned_abs()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// An accepted move. Sequence numbers start at 1 and grow by one per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub color: Color,
    pub seq: u32,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.seq, self.color, self.pos)
    }
}
