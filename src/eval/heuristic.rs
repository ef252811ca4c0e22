//! Heuristic weight field
//!
//! Folds the four directional figures of a cell into one score. One field is
//! kept per color and updated only for the cells a move affected.

use crate::board::{Color, Pos};

use super::analyser::{CellFigures, FiguresAnalyser, MoveAnalysis};

/// Score of a cell: the sum of its directional figure weights.
///
/// A five or overline in one direction outweighs anything the three other
/// directions can add, so a completing cell always ranks first.
#[must_use]
#[inline]
pub fn score_cell(figures: &CellFigures) -> u32 {
    figures.iter().map(|(_, figure)| figure.weight()).sum()
}

/// Per-color cell scores, zero on occupied cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightField {
    color: Color,
    size: usize,
    weights: Vec<u32>,
}

impl WeightField {
    pub fn new(color: Color, size: usize) -> Self {
        Self {
            color,
            size,
            weights: vec![0; size * size],
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn weight_at(&self, pos: Pos) -> u32 {
        self.weights[pos.to_index(self.size)]
    }

    /// Rescore the cells a move affected, reading their figures from the
    /// analyser of the same color.
    pub fn apply(&mut self, analysis: &MoveAnalysis, analyser: &FiguresAnalyser) {
        debug_assert_eq!(analyser.color(), self.color);
        for &pos in &analysis.affected {
            self.weights[pos.to_index(self.size)] = score_cell(&analyser.figures_at(pos));
        }
    }

    /// Zero a cell that just became occupied
    #[inline]
    pub fn clear_cell(&mut self, pos: Pos) {
        self.weights[pos.to_index(self.size)] = 0;
    }

    /// Rescore every cell from a fully built analyser
    pub fn rebuild(&mut self, analyser: &FiguresAnalyser) {
        debug_assert_eq!(analyser.color(), self.color);
        let size = self.size;
        for (idx, weight) in self.weights.iter_mut().enumerate() {
            *weight = score_cell(&analyser.figures_at(Pos::from_index(idx, size)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Direction};
    use crate::eval::patterns::{FigureType, FigureWeight};

    struct Fixture {
        board: Board,
        analyser: FiguresAnalyser,
        field: WeightField,
    }

    impl Fixture {
        fn new(color: Color) -> Self {
            Self {
                board: Board::new(15),
                analyser: FiguresAnalyser::new(color, 15),
                field: WeightField::new(color, 15),
            }
        }

        fn play(&mut self, col: u8, row: u8, color: Color) {
            let mv = self.board.put_stone(Pos::new(col, row), color);
            let analysis = self.analyser.analyse_move(&self.board, mv);
            self.field.apply(&analysis, &self.analyser);
            self.analyser.clear_cell(mv.pos);
            self.field.clear_cell(mv.pos);
        }
    }

    #[test]
    fn test_score_cell_sums_directions() {
        let mut figures = CellFigures::default();
        assert_eq!(score_cell(&figures), 0);
        figures.set(Direction::Horizontal, FigureType::OpenThree);
        figures.set(Direction::Vertical, FigureType::OpenTwo);
        assert_eq!(
            score_cell(&figures),
            FigureWeight::OPEN_THREE + FigureWeight::OPEN_TWO
        );
    }

    #[test]
    fn test_five_dominates_any_other_cell() {
        let mut five = CellFigures::default();
        five.set(Direction::Horizontal, FigureType::Five);

        let mut fours = CellFigures::default();
        for d in Direction::ALL {
            fours.set(d, FigureType::OpenFour);
        }
        assert!(score_cell(&five) > score_cell(&fours));
    }

    #[test]
    fn test_field_tracks_affected_cells() {
        let mut fx = Fixture::new(Color::Black);
        fx.play(7, 7, Color::Black);
        fx.play(8, 7, Color::Black);

        // extending the pair on the row makes an open three
        let left = Pos::new(6, 7);
        assert!(fx.field.weight_at(left) >= FigureWeight::OPEN_THREE);
        assert_eq!(fx.field.weight_at(Pos::new(7, 7)), 0);
        assert_eq!(fx.field.weight_at(Pos::new(0, 0)), 0);
    }

    #[test]
    fn test_blocking_lowers_weights() {
        let mut fx = Fixture::new(Color::Black);
        fx.play(7, 7, Color::Black);
        fx.play(8, 7, Color::Black);
        let before = fx.field.weight_at(Pos::new(9, 7));

        fx.play(10, 7, Color::White);
        assert!(fx.field.weight_at(Pos::new(9, 7)) < before);
    }

    #[test]
    fn test_incremental_matches_rebuild() {
        let mut fx = Fixture::new(Color::White);
        let moves = [
            (7, 7, Color::Black),
            (8, 8, Color::White),
            (6, 6, Color::Black),
            (8, 7, Color::White),
            (9, 9, Color::Black),
            (8, 6, Color::White),
            (8, 5, Color::Black),
        ];
        for (col, row, color) in moves {
            fx.play(col, row, color);
        }

        let mut rebuilt = WeightField::new(Color::White, 15);
        rebuilt.rebuild(&fx.analyser);
        assert_eq!(rebuilt, fx.field);
    }
}
