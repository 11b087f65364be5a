//! Zobrist hashing for position identification
//!
//! The hash picks a transposition table slot; entries are still verified
//! against the full [`BoardKey`](crate::board::BoardKey), so a
//! collision can cost a slot but never return a wrong score.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player, Pos, Stone};
//! use gomoku::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let mut board = Board::new();
//! let empty = zt.hash(&board);
//!
//! board.place_stone(Pos::new(9, 9), Stone::Black);
//! assert_ne!(zt.hash(&board), empty);
//! ```

use crate::board::{Board, Player, TOTAL_CELLS};

/// Capture tallies above this share one hash value
const MAX_HASHED_CAPTURES: usize = 16;

/// Zobrist hash table for position hashing.
///
/// Uses XOR-based hashing with precomputed random values for each
/// (position, stone color) combination, the side to move and the capture
/// tallies.
pub struct ZobristTable {
    /// Random values for black stones at each position
    black: [u64; TOTAL_CELLS],
    /// Random values for white stones at each position
    white: [u64; TOTAL_CELLS],
    /// Random value XORed when black is to move
    black_to_move: u64,
    /// Random values for capture counts: [color][count]
    captures: [[u64; MAX_HASHED_CAPTURES + 1]; 2],
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator (LCG) with a fixed seed
    /// to ensure reproducible hashes across different runs.
    #[must_use]
    pub fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // High bits of an LCG are the well-mixed ones
            seed ^ (seed >> 29)
        };

        let mut black = [0u64; TOTAL_CELLS];
        let mut white = [0u64; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            black[i] = next_rand();
            white[i] = next_rand();
        }

        let mut captures = [[0u64; MAX_HASHED_CAPTURES + 1]; 2];
        for row in captures.iter_mut() {
            for value in row.iter_mut() {
                *value = next_rand();
            }
        }

        Self {
            black,
            white,
            black_to_move: next_rand(),
            captures,
        }
    }

    /// Compute the full hash for a board position.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let mut h = 0u64;

        for pos in board.stones(Player::Black).iter_ones() {
            h ^= self.black[pos.to_index()];
        }
        for pos in board.stones(Player::White).iter_ones() {
            h ^= self.white[pos.to_index()];
        }

        if board.mover() == Player::Black {
            h ^= self.black_to_move;
        }

        for player in [Player::Black, Player::White] {
            let count = usize::from(board.captures(player)).min(MAX_HASHED_CAPTURES);
            h ^= self.captures[player.index()][count];
        }

        h
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};

    #[test]
    fn test_zobrist_side_to_move() {
        let zt = ZobristTable::new();
        let mut board = Board::new();
        let black_hash = zt.hash(&board);
        board.set_mover(Player::White);
        assert_ne!(black_hash, zt.hash(&board));
    }

    #[test]
    fn test_zobrist_deterministic() {
        let board = Board::new();
        assert_eq!(ZobristTable::new().hash(&board), ZobristTable::new().hash(&board));
    }

    #[test]
    fn test_zobrist_different_positions() {
        let zt = ZobristTable::new();
        let mut board1 = Board::new();
        let mut board2 = Board::new();
        board1.place_stone(Pos::new(9, 9), Stone::Black);
        board2.place_stone(Pos::new(10, 10), Stone::Black);
        assert_ne!(zt.hash(&board1), zt.hash(&board2));
    }

    #[test]
    fn test_zobrist_same_position_different_order() {
        let zt = ZobristTable::new();
        let mut board1 = Board::new();
        let mut board2 = Board::new();

        board1.place_stone(Pos::new(9, 9), Stone::Black);
        board1.place_stone(Pos::new(10, 10), Stone::White);
        board2.place_stone(Pos::new(10, 10), Stone::White);
        board2.place_stone(Pos::new(9, 9), Stone::Black);

        assert_eq!(zt.hash(&board1), zt.hash(&board2));
    }

    #[test]
    fn test_zobrist_captures_matter() {
        let zt = ZobristTable::new();
        let mut board = Board::new();
        let before = zt.hash(&board);
        board.set_captures(Player::Black, 2);
        assert_ne!(before, zt.hash(&board));
    }
}
