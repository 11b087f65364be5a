//! Capture rules (Pente-style pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured,
//! and only the player closing the bracket captures.

use crate::board::{Board, Player, Pos};

use super::DIRECTIONS;

/// One move can close at most one bracket per direction: 8 pairs.
const MAX_CAPTURED: usize = 16;

/// Stones removed by a single move.
///
/// Fixed capacity and `Copy`, so recording captures for every searched node
/// never touches the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSet {
    positions: [Pos; MAX_CAPTURED],
    len: u8,
}

impl CaptureSet {
    pub const fn new() -> Self {
        Self {
            positions: [Pos { row: 0, col: 0 }; MAX_CAPTURED],
            len: 0,
        }
    }

    #[inline]
    fn push_pair(&mut self, first: Pos, second: Pos) {
        let at = self.len as usize;
        self.positions[at] = first;
        self.positions[at + 1] = second;
        self.len += 2;
    }

    /// Number of stones captured
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.positions[..self.len as usize]
    }

    pub fn contains(&self, pos: &Pos) -> bool {
        self.as_slice().contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.as_slice().iter().copied()
    }
}

impl Default for CaptureSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The pair bracketed by a stone at `pos` along `(dr, dc)`, if any
#[inline]
fn bracketed_pair(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> Option<(Pos, Pos)> {
    let opponent = player.opponent().stone();
    let far = pos.offset(dr, dc, 3)?;
    let first = pos.offset(dr, dc, 1)?;
    let second = pos.offset(dr, dc, 2)?;

    (board.get(first) == opponent
        && board.get(second) == opponent
        && board.get(far) == player.stone())
    .then_some((first, second))
}

/// Find positions that would be captured if `player` places at `pos`.
///
/// Capture pattern: the placed stone, two opponent stones, then one of the
/// player's stones at distance 3, checked in both senses of all 4 axes.
pub fn get_captured_positions(board: &Board, pos: Pos, player: Player) -> CaptureSet {
    let mut captured = CaptureSet::new();

    for &(dr, dc) in &DIRECTIONS {
        for sign in [-1i32, 1i32] {
            if let Some((first, second)) = bracketed_pair(board, pos, player, dr * sign, dc * sign) {
                captured.push_pair(first, second);
            }
        }
    }

    captured
}

/// Remove every bracketed pair around the stone just placed at `pos` and
/// credit `player` with the removed stones.
pub fn execute_captures(board: &mut Board, pos: Pos, player: Player) -> CaptureSet {
    let captured = get_captured_positions(board, pos, player);

    for cap_pos in captured.iter() {
        board.remove_stone(cap_pos);
    }
    board.add_captures(player, captured.len() as u8);

    captured
}

/// Check if a move would result in any captures.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        [-1i32, 1i32]
            .into_iter()
            .any(|sign| bracketed_pair(board, pos, player, dr * sign, dc * sign).is_some())
    })
}
