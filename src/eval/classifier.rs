//! Line figure classifier
//!
//! For a single projected line and a target color, decides which figure the
//! color would form by placing one stone on each empty cell.
//!
//! A line is scanned in 5-cell windows. A window is a candidate when it lies
//! inside the line and holds no opponent stone. For an empty cell inside a
//! candidate window the hypothetical stone is added and the window is
//! measured:
//! - `stones`: target stones in the window, hypothetical one included
//! - `holes`: empty cells between the first and last of those stones
//! - open space on each side of the run, counting the cell just outside the
//!   window only if it is empty (a board edge or opponent stone never is)
//!
//! A cell usually sits in several windows; it keeps the most severe figure.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::board::{Color, Stone};

use super::patterns::FigureType;

/// Number of cells a figure is measured over
pub const FIGURE_LEN: usize = 5;

/// A candidate 5-cell segment of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: usize,
    len: usize,
    /// Cell just before the window, `None` at the line's edge
    left_edge: Option<Stone>,
    /// Cell just after the window, `None` at the line's edge
    right_edge: Option<Stone>,
}

impl Window {
    /// Build a window if it is a figure candidate for `color`.
    ///
    /// Rejects windows that are not exactly `FIGURE_LEN` long, run past the
    /// end of the line, or contain an opponent stone.
    pub fn new(line: &[Stone], color: Color, start: usize, len: usize) -> Option<Self> {
        if len != FIGURE_LEN || start + len > line.len() {
            return None;
        }
        let opponent = color.opponent().stone();
        if line[start..start + len].contains(&opponent) {
            return None;
        }

        let left_edge = start.checked_sub(1).map(|i| line[i]);
        let right_edge = line.get(start + len).copied();

        Some(Self {
            start,
            len,
            left_edge,
            right_edge,
        })
    }

    #[inline]
    pub fn cells(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    #[inline]
    pub fn left_edge(&self) -> Option<Stone> {
        self.left_edge
    }

    #[inline]
    pub fn right_edge(&self) -> Option<Stone> {
        self.right_edge
    }

    /// Figure formed inside this window by a `color` stone on empty `cell`.
    pub fn figure_at(&self, line: &[Stone], color: Color, cell: usize) -> FigureType {
        debug_assert!(self.cells().contains(&cell));
        debug_assert!(line[cell].is_empty());

        let own = color.stone();
        let mut stones = 0usize;
        let mut holes = 0usize;
        let mut gap = 0usize;
        let mut trailing = 0usize;
        let mut left_space = usize::from(self.left_edge == Some(Stone::Empty));
        let mut right_space = usize::from(self.right_edge == Some(Stone::Empty));

        for i in self.cells() {
            if i == cell || line[i] == own {
                stones += 1;
                holes += gap;
                gap = 0;
                trailing = 0;
            } else {
                if stones == 0 {
                    left_space += 1;
                } else {
                    gap += 1;
                }
                trailing += 1;
            }
        }
        right_space += trailing;

        let open = left_space > 0 && right_space > 0;
        match stones {
            2 => match holes {
                0 if open => FigureType::OpenTwo,
                0 => FigureType::ClosedTwo,
                1 => FigureType::ClosedTwo1,
                2 => FigureType::ClosedTwo2,
                _ => FigureType::None,
            },
            3 => match holes {
                0 if open => FigureType::OpenThree,
                0 => FigureType::ClosedThree,
                1 => FigureType::ClosedThree1,
                2 => FigureType::ClosedThree2,
                _ => FigureType::None,
            },
            4 if holes == 0 && open => FigureType::OpenFour,
            4 => FigureType::ClosedFour,
            FIGURE_LEN => {
                if self.run_length(line, own) > FIGURE_LEN {
                    FigureType::SixOrMore
                } else {
                    FigureType::Five
                }
            }
            _ => FigureType::None,
        }
    }

    /// Length of the run of `own` stones through a completely filled window,
    /// extended past the window edges
    fn run_length(&self, line: &[Stone], own: Stone) -> usize {
        let before = line[..self.start]
            .iter()
            .rev()
            .take_while(|&&s| s == own)
            .count();
        let after = line[self.start + self.len..]
            .iter()
            .take_while(|&&s| s == own)
            .count();
        before + self.len + after
    }
}

/// Best figure `color` can form at every empty cell of `line`.
///
/// Cells without any figure are absent from the result.
pub fn classify_line(line: &[Stone], color: Color) -> BTreeMap<usize, FigureType> {
    let mut best = BTreeMap::new();
    if line.len() < FIGURE_LEN {
        return best;
    }

    for start in 0..=line.len() - FIGURE_LEN {
        let Some(window) = Window::new(line, color, start, FIGURE_LEN) else {
            continue;
        };
        for cell in window.cells() {
            if !line[cell].is_empty() {
                continue;
            }
            let figure = window.figure_at(line, color, cell);
            if figure == FigureType::None {
                continue;
            }
            best.entry(cell)
                .and_modify(|current: &mut FigureType| *current = (*current).max(figure))
                .or_insert(figure);
        }
    }

    best
}
