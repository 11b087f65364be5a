//! Evaluation module for Gomoku positions
//!
//! Static scoring of a board, independent of search. The evaluation considers:
//! - Terminal status
//! - Capture difference
//! - Line patterns (twos, threes, fours, fives)
//! - Positional bonuses (center and corners)
//! - Mobility under the double-three rule

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, pattern_counts, PatternCounts};
pub use patterns::{run_score, PatternScore, RunKind};
