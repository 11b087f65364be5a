//! Game rules for capture Gomoku
//!
//! This module implements the rule set:
//! - Capture rules (pair capture by bracketing)
//! - Win conditions (5-in-a-row, 10 captured stones)
//! - Forbidden moves (double-three)
//! - Move application and exact reversal for search

pub mod capture;
pub mod forbidden;
pub mod play;
pub mod win;

use serde::{Deserialize, Serialize};

// Re-exports for convenient access
pub use capture::{execute_captures, get_captured_positions, has_capture, CaptureSet};
pub use forbidden::{count_free_threes, is_double_three};
pub use play::{apply, check_move, has_legal_move, is_legal, legal_moves, revert, AppliedMove};
pub use win::{can_break_five_by_capture, find_five_positions, five_line_at_pos, has_five_at_pos};

/// Direction vectors for the 4 line axes
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Optional rule variations.
///
/// Both default to off, which is the reference rule set: captures never
/// excuse a double-three and a five wins the moment it is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// A move that captures may form a double-three
    pub capture_exempts_double_three: bool,
    /// A five only wins once the opponent cannot capture a pair out of it
    pub five_breakable_by_capture: bool,
}
