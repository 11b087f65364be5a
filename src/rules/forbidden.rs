//! Double-three forbidden move rule
//!
//! A double-three is a move that creates two or more free-threes at once.
//! A free-three on an axis is one of these shapes through the new stone,
//! with every `_` an empty cell on the board:
//!
//! ```text
//! _XXX_    _XX_X_    _X_XX_
//! ```
//!
//! The check reads the board around the candidate cell as if the stone were
//! already there, so it never writes to the board.

use crate::board::{Board, Player, Pos, Stone};

use super::capture::has_capture;
use super::DIRECTIONS;

/// Cells read on each side of the candidate
const REACH: i32 = 4;
const WINDOW: usize = 2 * REACH as usize + 1;
const CENTER: usize = REACH as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Open,
    Mine,
    /// Opponent stone or off the board
    Blocked,
}

#[derive(Clone, Copy)]
enum Slot {
    Open,
    Mine,
}

/// Free-three templates. The set is closed under reversal, so scanning one
/// sense of an axis also covers the other.
const TEMPLATES: [&[Slot]; 3] = [
    &[Slot::Open, Slot::Mine, Slot::Mine, Slot::Mine, Slot::Open],
    &[Slot::Open, Slot::Mine, Slot::Mine, Slot::Open, Slot::Mine, Slot::Open],
    &[Slot::Open, Slot::Mine, Slot::Open, Slot::Mine, Slot::Mine, Slot::Open],
];

/// The 9 cells centered on `pos` along `(dr, dc)`, with `pos` itself
/// treated as holding `player`'s stone.
fn read_window(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> [Cell; WINDOW] {
    let mine = player.stone();
    let mut window = [Cell::Blocked; WINDOW];

    for (slot, i) in window.iter_mut().zip(-REACH..=REACH) {
        if i == 0 {
            *slot = Cell::Mine;
            continue;
        }
        *slot = match pos.offset(dr, dc, i).map(|p| board.get(p)) {
            Some(Stone::Empty) => Cell::Open,
            Some(stone) if stone == mine => Cell::Mine,
            _ => Cell::Blocked,
        };
    }

    window
}

/// True if some template matches a stretch of the window covering the center
fn has_free_three(window: &[Cell; WINDOW]) -> bool {
    TEMPLATES.iter().any(|template| {
        let len = template.len();
        (0..=WINDOW - len)
            .filter(|&start| start <= CENTER && CENTER < start + len)
            .any(|start| {
                template
                    .iter()
                    .zip(&window[start..start + len])
                    .all(|(slot, cell)| match slot {
                        Slot::Open => *cell == Cell::Open,
                        Slot::Mine => *cell == Cell::Mine,
                    })
            })
    })
}

/// Count the axes on which placing at `pos` would give `player` a free-three
pub fn count_free_threes(board: &Board, pos: Pos, player: Player) -> u8 {
    let mut count = 0;

    for &(dr, dc) in &DIRECTIONS {
        if has_free_three(&read_window(board, pos, player, dr, dc)) {
            count += 1;
            // Early exit: double-three only needs 2+
            if count >= 2 {
                return count;
            }
        }
    }

    count
}

/// Check if placing at `pos` is a forbidden double-three for `player`.
///
/// Captures only excuse the move when the board's rule set says so.
pub fn is_double_three(board: &Board, pos: Pos, player: Player) -> bool {
    if count_free_threes(board, pos, player) < 2 {
        return false;
    }
    !(board.rules().capture_exempts_double_three && has_capture(board, pos, player))
}
