//! Main AI Engine
//!
//! Wraps the [`Searcher`] with a wall-clock budget and an external cancel
//! switch, and turns "nothing to play" into an error instead of a sentinel.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Player, Pos, Stone};
//!
//! // Use smaller depth for faster example
//! let config = EngineConfig { max_depth: 2, time_limit_ms: 200, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(9, 9), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Player::White).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Depth: {} in {}ms", result.depth, result.time_ms);
//! ```

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::search::{CancelToken, Deadline, SearchStats, Searcher, StopCondition, TTStats};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Minimax score of the move, Black's point of view
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Main AI Engine for Gomoku.
///
/// Each call searches from scratch: the transposition table is cleared
/// and the time budget restarts.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
    cancel: CancelToken,
    last: Option<MoveResult>,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - 16 MB transposition table
    /// - Maximum depth of 10
    /// - 500ms time limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(&config),
            config,
            cancel: CancelToken::new(),
            last: None,
        }
    }

    /// Get the best move for `mover` within the configured time budget.
    ///
    /// `board` is never modified. Returns [`GameError::NoLegalMoves`] when
    /// `mover` has nothing to play or the game is already over.
    pub fn get_best_move(&mut self, board: &Board, mover: Player) -> Result<Pos, GameError> {
        self.get_move_with_stats(board, mover).map(|result| result.best_move)
    }

    /// Get the best move with detailed search statistics.
    ///
    /// A cancel issued before or during the call cuts the search short and
    /// is consumed when the call returns.
    pub fn get_move_with_stats(&mut self, board: &Board, mover: Player) -> Result<MoveResult, GameError> {
        let deadline = Deadline::new(self.config.time_limit(), self.cancel.clone());
        let result = self.search_with(board, mover, &deadline);
        self.cancel.reset();
        result
    }

    /// Search under a caller-supplied stop condition instead of the
    /// configured time budget.
    pub fn search_with<S: StopCondition>(
        &mut self,
        board: &Board,
        mover: Player,
        stop: &S,
    ) -> Result<MoveResult, GameError> {
        let result = self.searcher.search(board, mover, stop);
        let best_move = result.best_move.ok_or(GameError::NoLegalMoves)?;

        let move_result = MoveResult {
            best_move,
            score: result.score,
            depth: result.depth,
            time_ms: result.elapsed.as_millis() as u64,
            nodes: result.nodes,
            stats: result.stats,
        };
        self.last = Some(move_result.clone());
        Ok(move_result)
    }

    /// Token that stops a running search when cancelled.
    ///
    /// The engine re-arms it when a timed search returns.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Statistics of the most recent successful search
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
        self.searcher.set_max_depth(depth);
    }

    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }

    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.config.time_limit_ms = time_ms;
    }

    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::eval::PatternScore;
    use crate::rules::{apply, is_legal};
    use std::time::Duration;

    fn quick_engine(max_depth: u8, time_limit_ms: u64) -> AIEngine {
        AIEngine::with_config(EngineConfig {
            max_depth,
            time_limit_ms,
            tt_size_mb: 1,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), 10);
        assert_eq!(engine.config().time_limit_ms, 500);
        assert!(engine.last_result().is_none());
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        // 4 in a row - one away from win
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }

        let mut engine = quick_engine(3, 2_000);
        let result = engine.get_move_with_stats(&board, Player::Black).unwrap();

        assert_eq!(result.best_move, Pos::new(9, 4));
        assert_eq!(result.score, PatternScore::WIN);
        assert_eq!(engine.last_result(), Some(&result));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        // White has 4 in a row
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::White);
        }
        board.place_stone(Pos::new(10, 5), Stone::Black); // Some black stone

        let mut engine = quick_engine(2, 5_000);
        let best = engine.get_best_move(&board, Player::Black).unwrap();

        // Should block at (9,4)
        assert_eq!(best, Pos::new(9, 4));
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new();
        let mut engine = quick_engine(2, 500);
        let best = engine.get_best_move(&board, Player::Black).unwrap();

        assert!(best.in_bounds());
        assert!(is_legal(&board, best));
    }

    #[test]
    fn test_engine_no_legal_moves() {
        let mut board = Board::new();
        for &(r, c) in &[(5u8, 0u8), (6, 0), (5, 1), (6, 1), (5, 2), (6, 2), (5, 3), (6, 3), (5, 4)] {
            apply(&mut board, Pos::new(r, c)).unwrap();
        }

        let mut engine = quick_engine(2, 200);
        assert_eq!(
            engine.get_best_move(&board, Player::White),
            Err(GameError::NoLegalMoves)
        );
        assert!(engine.last_result().is_none());
    }

    #[test]
    fn test_engine_cancelled_search_still_answers() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(10, 10), Stone::White);

        let mut engine = quick_engine(8, 60_000);
        let token = engine.cancel_token();
        token.cancel();
        let deadline = Deadline::new(Duration::from_secs(60), token);

        let result = engine.search_with(&board, Player::Black, &deadline).unwrap();
        assert_eq!(result.depth, 1);
        assert!(board.is_empty(result.best_move));
    }

    #[test]
    fn test_cancel_before_search_is_honoured() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(10, 10), Stone::White);

        let mut engine = quick_engine(8, 60_000);
        let token = engine.cancel_token();
        token.cancel();

        let result = engine.get_move_with_stats(&board, Player::Black).unwrap();
        assert_eq!(result.depth, 1);
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_engine_time_reasonable() {
        let mut board = Board::new();
        // Create a position where there's already some activity
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(10, 10), Stone::White);
        board.place_stone(Pos::new(9, 10), Stone::Black);
        board.place_stone(Pos::new(8, 9), Stone::White);

        let mut engine = quick_engine(10, 100);
        let result = engine.get_move_with_stats(&board, Player::Black).unwrap();

        // Allow more time in debug builds (unoptimized code is much slower)
        #[cfg(debug_assertions)]
        let max_time_ms = 5_000;
        #[cfg(not(debug_assertions))]
        let max_time_ms = 500;

        assert!(
            result.time_ms < max_time_ms,
            "Search took too long: {}ms (limit: {}ms)",
            result.time_ms,
            max_time_ms
        );
        assert!(result.depth >= 1);
    }

    #[test]
    fn test_engine_set_time_limit() {
        let mut engine = quick_engine(10, 60_000);
        engine.set_time_limit(30);
        assert_eq!(engine.config().time_limit_ms, 30);

        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(10, 10), Stone::White);
        let result = engine.get_move_with_stats(&board, Player::Black).unwrap();
        assert!(result.depth < 10);
    }

    #[test]
    fn test_engine_set_max_depth() {
        let mut engine = quick_engine(6, 500);
        engine.set_max_depth(1);
        assert_eq!(engine.max_depth(), 1);

        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Stone::Black);
        let result = engine.get_move_with_stats(&board, Player::White).unwrap();
        assert_eq!(result.depth, 1);
    }
}
