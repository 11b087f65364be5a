//! Search module for Gomoku AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Candidate selection and root ordering
//! - Minimax with alpha-beta pruning and iterative deepening
//! - Stop conditions (deadline, cancellation, node budget)

pub mod alphabeta;
pub mod candidates;
pub mod stop;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use stop::{CancelToken, Deadline, Never, NodeBudget, StopCondition};
pub use tt::{TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
