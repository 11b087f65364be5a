//! Transposition Table for caching search results
//!
//! The table stores minimax scores indexed by board hash, so a position
//! reached through a different move order is not searched twice.
//!
//! Slots are picked by Zobrist hash but every entry also carries the full
//! [`BoardKey`], and a probe only answers when the keys are equal. The size
//! is fixed at construction, so memory stays bounded however long a search
//! runs.
//!
//! # Example
//!
//! ```
//! use gomoku::board::Board;
//! use gomoku::search::{TranspositionTable, ZobristTable};
//!
//! let zt = ZobristTable::new();
//! let mut tt = TranspositionTable::new(1); // 1 MB
//!
//! let board = Board::new();
//! let hash = zt.hash(&board);
//! tt.store(hash, board.key(), 3, 42);
//!
//! assert_eq!(tt.probe(hash, &board.key(), 3), Some(42));
//! assert_eq!(tt.probe(hash, &board.key(), 4), None); // too shallow
//! ```

use log::trace;

use crate::board::BoardKey;

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Exact position this score belongs to
    pub key: BoardKey,
    /// Remaining depth the score was searched to
    pub depth: u8,
    /// Minimax score, Black's point of view
    pub score: i32,
}

/// Transposition table for caching search results.
///
/// Uses a simple direct-mapped approach where each hash maps to exactly
/// one slot. Collisions are handled by replacement policies based on
/// search depth.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    ///
    /// Each slot holds a whole board key, so a megabyte buys a few thousand
    /// slots. At least 1024 slots are always allocated.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = (size_mb * 1024 * 1024) / entry_size;

        // Ensure at least some entries
        let size = size.max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Probe the table for a position.
    ///
    /// Returns the stored score when the slot holds exactly `key` and was
    /// searched at least `depth` plies deep.
    #[must_use]
    pub fn probe(&self, hash: u64, key: &BoardKey, depth: u8) -> Option<i32> {
        let entry = self.entries[self.slot(hash)]?;

        if entry.key != *key || entry.depth < depth {
            return None;
        }
        Some(entry.score)
    }

    /// Store a position in the table.
    ///
    /// Uses a depth-preferred replacement policy: an entry is replaced if
    /// the slot is empty, contains the same position, or the new search
    /// is at least as deep as the existing entry.
    pub fn store(&mut self, hash: u64, key: BoardKey, depth: u8, score: i32) {
        let idx = self.slot(hash);

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.key == key || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry { key, depth, score });
        }
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        trace!("transposition table cleared ({} slots)", self.size);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}
