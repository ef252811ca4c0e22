//! Incremental per-color figure field
//!
//! Keeps, for every empty cell and each of the four directions, the figure
//! the analysed color would form by playing there. After a move only the
//! four lines through the new stone can change, so only those are
//! reclassified.

use tracing::trace;

use crate::board::{Board, Color, Direction, Line, Move, Pos};

use super::classifier::classify_line;
use super::patterns::FigureType;

/// Figures at one cell, one per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellFigures([FigureType; 4]);

impl CellFigures {
    #[inline]
    pub fn get(&self, direction: Direction) -> FigureType {
        self.0[direction.index()]
    }

    #[inline]
    pub fn set(&mut self, direction: Direction, figure: FigureType) {
        self.0[direction.index()] = figure;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, FigureType)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Number of directions holding `figure`
    pub fn count(&self, figure: FigureType) -> usize {
        self.0.iter().filter(|&&f| f == figure).count()
    }

    pub fn contains(&self, figure: FigureType) -> bool {
        self.0.contains(&figure)
    }

    /// Most severe figure over all directions
    pub fn best(&self) -> FigureType {
        self.0.iter().copied().max().unwrap_or_default()
    }

    pub fn is_none(&self) -> bool {
        self.0.iter().all(|&f| f == FigureType::None)
    }
}

/// Result of analysing one move for one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAnalysis {
    pub mv: Move,
    /// Figures the analysed color had at the moved cell just before the
    /// stone landed. For the mover this is what the move actually built.
    pub figures: CellFigures,
    /// Empty cells whose figures changed in at least one direction
    pub affected: Vec<Pos>,
}

/// Figure field for one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiguresAnalyser {
    color: Color,
    size: usize,
    field: Vec<CellFigures>,
}

impl FiguresAnalyser {
    /// Field for an empty `size` board: nothing anywhere
    pub fn new(color: Color, size: usize) -> Self {
        Self {
            color,
            size,
            field: vec![CellFigures::default(); size * size],
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Figures at `pos`; all `None` for an occupied cell
    #[inline]
    pub fn figures_at(&self, pos: Pos) -> CellFigures {
        self.field[pos.to_index(self.size)]
    }

    /// Reclassify the four lines through a move that is already on `board`.
    ///
    /// The moved cell keeps its pre-move figures until `clear_cell` is called,
    /// so consumers of the returned analysis can still inspect them.
    pub fn analyse_move(&mut self, board: &Board, mv: Move) -> MoveAnalysis {
        let mut affected = Vec::new();

        for direction in Direction::ALL {
            let line = Line::through(board, mv.pos, direction);
            let figures = classify_line(&line.cells, self.color);

            for (i, &pos) in line.coords.iter().enumerate() {
                if pos == mv.pos || !line.cells[i].is_empty() {
                    continue;
                }
                let figure = figures.get(&i).copied().unwrap_or_default();
                let entry = &mut self.field[pos.to_index(self.size)];
                if entry.get(direction) != figure {
                    entry.set(direction, figure);
                    // two lines through the move only meet at the move itself
                    affected.push(pos);
                }
            }
        }

        trace!(
            color = %self.color,
            mv = %mv,
            affected = affected.len(),
            "move analysed"
        );

        MoveAnalysis {
            mv,
            figures: self.figures_at(mv.pos),
            affected,
        }
    }

    /// Forget the figures of a cell that just became occupied
    #[inline]
    pub fn clear_cell(&mut self, pos: Pos) {
        self.field[pos.to_index(self.size)] = CellFigures::default();
    }

    /// Recompute the whole field from `board`.
    pub fn rebuild(&mut self, board: &Board) {
        debug_assert_eq!(board.size(), self.size);
        self.field.fill(CellFigures::default());

        for direction in Direction::ALL {
            for start in direction.line_starts(self.size) {
                let line = Line::through(board, start, direction);
                for (i, figure) in classify_line(&line.cells, self.color) {
                    self.field[line.coords[i].to_index(self.size)].set(direction, figure);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play moves on the board and keep the analyser in step
    fn play(board: &mut Board, analyser: &mut FiguresAnalyser, moves: &[(u8, u8, Color)]) {
        for &(col, row, color) in moves {
            let mv = board.put_stone(Pos::new(col, row), color);
            analyser.analyse_move(board, mv);
            analyser.clear_cell(mv.pos);
        }
    }

    #[test]
    fn test_first_stone_creates_twos_around_it() {
        let mut board = Board::new(15);
        let mut analyser = FiguresAnalyser::new(Color::Black, 15);
        let mv = board.put_stone(Pos::new(7, 7), Color::Black);
        let analysis = analyser.analyse_move(&board, mv);

        assert!(analysis.figures.is_none());
        // neighbour on the row forms an open two horizontally
        let right = analyser.figures_at(Pos::new(8, 7));
        assert_eq!(right.get(Direction::Horizontal), FigureType::OpenTwo);
        assert_eq!(right.get(Direction::Vertical), FigureType::None);
        // a diagonal neighbour only sees the diagonal
        let diag = analyser.figures_at(Pos::new(8, 8));
        assert_eq!(diag.get(Direction::DiagonalDown), FigureType::OpenTwo);
        assert!(analysis.affected.contains(&Pos::new(8, 7)));
        assert!(analysis.affected.contains(&Pos::new(8, 8)));
        assert!(!analysis.affected.contains(&Pos::new(7, 7)));
        // cells off the four lines never change
        assert!(!analysis.affected.contains(&Pos::new(9, 8)));
    }

    #[test]
    fn test_affected_cells_are_unique_and_empty() {
        let mut board = Board::new(15);
        let mut analyser = FiguresAnalyser::new(Color::White, 15);
        play(
            &mut board,
            &mut analyser,
            &[(7, 7, Color::Black), (8, 7, Color::White), (6, 6, Color::Black)],
        );
        let mv = board.put_stone(Pos::new(8, 8), Color::White);
        let analysis = analyser.analyse_move(&board, mv);

        let mut sorted = analysis.affected.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), analysis.affected.len());
        assert!(analysis.affected.iter().all(|&p| board.is_empty(p)));
    }

    #[test]
    fn test_moved_cell_keeps_figures_until_cleared() {
        let mut board = Board::new(15);
        let mut analyser = FiguresAnalyser::new(Color::Black, 15);
        play(
            &mut board,
            &mut analyser,
            &[(3, 7, Color::Black), (4, 7, Color::Black), (5, 7, Color::Black)],
        );
        let before = analyser.figures_at(Pos::new(6, 7));
        assert_eq!(before.get(Direction::Horizontal), FigureType::OpenFour);

        let mv = board.put_stone(Pos::new(6, 7), Color::Black);
        let analysis = analyser.analyse_move(&board, mv);
        assert_eq!(analysis.figures, before);
        assert_eq!(analyser.figures_at(mv.pos), before);

        analyser.clear_cell(mv.pos);
        assert!(analyser.figures_at(mv.pos).is_none());
    }

    #[test]
    fn test_blocked_figures_are_reset() {
        let mut board = Board::new(15);
        let mut analyser = FiguresAnalyser::new(Color::Black, 15);
        play(
            &mut board,
            &mut analyser,
            &[(5, 7, Color::Black), (6, 7, Color::Black)],
        );
        assert_ne!(
            analyser.figures_at(Pos::new(7, 7)).get(Direction::Horizontal),
            FigureType::None
        );

        // surround the pair tightly so no five can pass through it
        play(
            &mut board,
            &mut analyser,
            &[(4, 7, Color::White), (7, 7, Color::White)],
        );
        assert_eq!(
            analyser.figures_at(Pos::new(3, 7)).get(Direction::Horizontal),
            FigureType::None
        );
        assert_eq!(
            analyser.figures_at(Pos::new(8, 7)).get(Direction::Horizontal),
            FigureType::None
        );
    }

    #[test]
    fn test_incremental_field_matches_rebuild() {
        let mut board = Board::new(15);
        let mut analysers = [
            FiguresAnalyser::new(Color::Black, 15),
            FiguresAnalyser::new(Color::White, 15),
        ];
        let moves = [
            (7, 7), (8, 8), (7, 8), (6, 6), (7, 6), (7, 9), (8, 6), (9, 5),
            (0, 0), (14, 14), (13, 1), (1, 13), (6, 7), (10, 4), (5, 8), (4, 9),
        ];
        for (i, &(col, row)) in moves.iter().enumerate() {
            let color = if i % 2 == 0 { Color::Black } else { Color::White };
            let mv = board.put_stone(Pos::new(col, row), color);
            for analyser in analysers.iter_mut() {
                analyser.analyse_move(&board, mv);
                analyser.clear_cell(mv.pos);
            }
        }

        for analyser in &analysers {
            let mut rebuilt = FiguresAnalyser::new(analyser.color(), 15);
            rebuilt.rebuild(&board);
            assert_eq!(&rebuilt, analyser, "{} field diverged", analyser.color());

            // rebuilding an unchanged board is idempotent
            let mut again = rebuilt.clone();
            again.rebuild(&board);
            assert_eq!(again, rebuilt);
        }
    }

    #[test]
    fn test_cell_figures_helpers() {
        let mut figures = CellFigures::default();
        assert!(figures.is_none());
        figures.set(Direction::Horizontal, FigureType::OpenThree);
        figures.set(Direction::DiagonalUp, FigureType::OpenThree);
        figures.set(Direction::Vertical, FigureType::ClosedFour);
        assert_eq!(figures.count(FigureType::OpenThree), 2);
        assert!(figures.contains(FigureType::ClosedFour));
        assert_eq!(figures.best(), FigureType::ClosedFour);
        assert_eq!(figures.iter().count(), 4);
    }
}
