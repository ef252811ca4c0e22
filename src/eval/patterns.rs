//! Figure types and their heuristic weights
//!
//! A figure is what one hypothetical stone would form along a single line.
//! Severity is an explicit rank, so comparisons never depend on the order
//! variants happen to be declared in.

use std::cmp::Ordering;
use std::fmt;

/// Tactical figure a stone placement forms along one line.
///
/// The numeric suffix of the closed variants counts the empty cells inside
/// the figure (`ClosedTwo2` is `x__x`, `ClosedThree1` is `xx_x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FigureType {
    #[default]
    None,
    ClosedTwo2,
    ClosedTwo1,
    ClosedTwo,
    OpenTwo,
    ClosedThree2,
    ClosedThree1,
    ClosedThree,
    OpenThree,
    ClosedFour,
    OpenFour,
    Five,
    /// Overline: six or more in a row
    SixOrMore,
}

impl FigureType {
    /// Every figure, weakest first
    pub const ALL: [FigureType; 13] = [
        FigureType::None,
        FigureType::ClosedTwo2,
        FigureType::ClosedTwo1,
        FigureType::ClosedTwo,
        FigureType::OpenTwo,
        FigureType::ClosedThree2,
        FigureType::ClosedThree1,
        FigureType::ClosedThree,
        FigureType::OpenThree,
        FigureType::ClosedFour,
        FigureType::OpenFour,
        FigureType::Five,
        FigureType::SixOrMore,
    ];

    /// Severity rank, 0 for `None`
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            FigureType::None => 0,
            FigureType::ClosedTwo2 => 1,
            FigureType::ClosedTwo1 => 2,
            FigureType::ClosedTwo => 3,
            FigureType::OpenTwo => 4,
            FigureType::ClosedThree2 => 5,
            FigureType::ClosedThree1 => 6,
            FigureType::ClosedThree => 7,
            FigureType::OpenThree => 8,
            FigureType::ClosedFour => 9,
            FigureType::OpenFour => 10,
            FigureType::Five => 11,
            FigureType::SixOrMore => 12,
        }
    }

    /// Heuristic weight of the figure
    #[inline]
    pub fn weight(self) -> u32 {
        match self {
            FigureType::None => 0,
            FigureType::ClosedTwo2 => FigureWeight::CLOSED_TWO_2,
            FigureType::ClosedTwo1 => FigureWeight::CLOSED_TWO_1,
            FigureType::ClosedTwo => FigureWeight::CLOSED_TWO,
            FigureType::OpenTwo => FigureWeight::OPEN_TWO,
            FigureType::ClosedThree2 => FigureWeight::CLOSED_THREE_2,
            FigureType::ClosedThree1 => FigureWeight::CLOSED_THREE_1,
            FigureType::ClosedThree => FigureWeight::CLOSED_THREE,
            FigureType::OpenThree => FigureWeight::OPEN_THREE,
            FigureType::ClosedFour => FigureWeight::CLOSED_FOUR,
            FigureType::OpenFour => FigureWeight::OPEN_FOUR,
            FigureType::Five => FigureWeight::FIVE,
            FigureType::SixOrMore => FigureWeight::SIX_OR_MORE,
        }
    }
}

impl PartialOrd for FigureType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FigureType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for FigureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FigureType::None => "none",
            FigureType::ClosedTwo2 => "closed two (2 holes)",
            FigureType::ClosedTwo1 => "closed two (1 hole)",
            FigureType::ClosedTwo => "closed two",
            FigureType::OpenTwo => "open two",
            FigureType::ClosedThree2 => "closed three (2 holes)",
            FigureType::ClosedThree1 => "closed three (1 hole)",
            FigureType::ClosedThree => "closed three",
            FigureType::OpenThree => "open three",
            FigureType::ClosedFour => "closed four",
            FigureType::OpenFour => "open four",
            FigureType::Five => "five",
            FigureType::SixOrMore => "overline",
        };
        f.write_str(name)
    }
}

/// Weight table for figures.
/// Strictly increasing with severity; a completed line outweighs four
/// open fours so it always tops a cell's sum.
pub struct FigureWeight;

impl FigureWeight {
    // Building figures
    pub const CLOSED_TWO_2: u32 = 2;
    pub const CLOSED_TWO_1: u32 = 4;
    pub const CLOSED_TWO: u32 = 5;
    pub const OPEN_TWO: u32 = 15;

    // Threes
    pub const CLOSED_THREE_2: u32 = 25;
    pub const CLOSED_THREE_1: u32 = 27;
    pub const CLOSED_THREE: u32 = 29;
    /// Becomes an open four if not blocked
    pub const OPEN_THREE: u32 = 90;

    // Fours
    pub const CLOSED_FOUR: u32 = 99;
    /// Cannot be blocked on both ends
    pub const OPEN_FOUR: u32 = 400;

    // Completed lines
    pub const FIVE: u32 = 100_000;
    pub const SIX_OR_MORE: u32 = 100_001;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_matches_listing_order() {
        for pair in FigureType::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should rank below {:?}", pair[0], pair[1]);
        }
        assert_eq!(FigureType::ALL.iter().max(), Some(&FigureType::SixOrMore));
    }

    #[test]
    fn test_weight_hierarchy() {
        for pair in FigureType::ALL.windows(2) {
            assert!(
                pair[0].weight() < pair[1].weight(),
                "weight of {:?} should be below {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_terminal_weight_dominates_other_directions() {
        // a cell has four directions; the three others can hold open fours at most
        let strongest_rest = 4 * FigureType::OpenFour.weight();
        assert!(FigureType::Five.weight() > strongest_rest);
        assert!(FigureType::SixOrMore.weight() > strongest_rest);
    }
}
