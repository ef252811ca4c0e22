//! Board structure with move history

use std::fmt;

use super::bitboard::Bitboard;
use super::{ByColor, Color, Move, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board. Stones are placed once and never moved or removed.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Occupancy per color
    stones: ByColor<Bitboard>,
    /// Accepted moves in order
    history: Vec<Move>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} is outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            stones: ByColor::default(),
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.col as usize) < self.size && (pos.row as usize) < self.size
    }

    /// Get stone at position
    ///
    /// # Panics
    /// If `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let size = self.size;
        assert!(
            self.contains(pos),
            "cell {pos} is outside the {size}x{size} board"
        );
        let idx = pos.to_index(self.size);
        if self.stones[Color::Black].get(idx) {
            Stone::Black
        } else if self.stones[Color::White].get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Most recent accepted move
    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// All accepted moves, oldest first
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Place a stone and record the move.
    ///
    /// This is the low-level mutation path: legality is the referee's job.
    ///
    /// # Panics
    /// If the cell is off the board or already holds a stone. Either means
    /// the caller skipped validation.
    pub fn put_stone(&mut self, pos: Pos, color: Color) -> Move {
        let current = self.get(pos);
        assert!(
            current == Stone::Empty,
            "cannot put {color} on {pos}: cell already holds {current:?}"
        );
        self.stones[color].set(pos.to_index(self.size));

        let mv = Move {
            pos,
            color,
            seq: self.history.len() as u32 + 1,
        };
        self.history.push(mv);
        mv
    }

    /// Positions of one color's stones in row-major order
    pub fn positions(&self, color: Color) -> impl Iterator<Item = Pos> + '_ {
        self.stones[color]
            .iter_ones()
            .map(|idx| Pos::from_index(idx, self.size))
    }

    /// Every cell of the board in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones[Color::Black].count() + self.stones[Color::White].count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones[Color::Black].is_empty() && self.stones[Color::White].is_empty()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

/// Plain-text rendering: `x` black, `o` white, `.` empty
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{}", (b'A' + col as u8) as char)?;
            if col + 1 < self.size {
                write!(f, " ")?;
            }
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>2} ")?;
            for col in 0..self.size {
                let c = match self.get(Pos::new(col as u8, row as u8)) {
                    Stone::Black => 'x',
                    Stone::White => 'o',
                    Stone::Empty => '.',
                };
                write!(f, "{c}")?;
                if col + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
