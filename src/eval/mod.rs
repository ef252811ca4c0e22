//! Figure evaluation for Renju positions
//!
//! This module turns stones on the board into tactical figures and scores:
//! - Figure types and their weights (`patterns`)
//! - Per-line figure classification (`classifier`)
//! - Incremental per-color figure fields (`analyser`)
//! - Per-color weight fields read by the AI (`heuristic`)

pub mod analyser;
pub mod classifier;
pub mod heuristic;
pub mod patterns;

pub use analyser::{CellFigures, FiguresAnalyser, MoveAnalysis};
pub use classifier::{classify_line, Window, FIGURE_LEN};
pub use heuristic::{score_cell, WeightField};
pub use patterns::{FigureType, FigureWeight};
