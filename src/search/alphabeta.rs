//! Alpha-Beta search with iterative deepening and transposition table
//!
//! This module implements the core search algorithm for the Gomoku AI.
//! Black maximizes and White minimizes a score that is always taken from
//! Black's point of view.
//!
//! # Features
//!
//! - Iterative deepening for time management
//! - Transposition table for avoiding redundant searches
//! - Move generation with proximity filtering
//! - Apply/revert on one work board, no per-node cloning
//!
//! A depth only replaces the previous answer if it finished before the stop
//! condition fired. Depth 1 never polls the stop condition, so a search on a
//! position with legal moves always returns one.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player, Pos, Stone};
//! use gomoku::config::EngineConfig;
//! use gomoku::search::{Never, Searcher};
//!
//! let config = EngineConfig { max_depth: 2, ..EngineConfig::default() };
//! let mut searcher = Searcher::new(&config);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(9, 9), Stone::Black);
//!
//! let result = searcher.search(&board, Player::White, &Never);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::rules::{apply, revert};

use super::candidates;
use super::{StopCondition, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX / 2;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
    /// Depths abandoned because the stop condition fired
    pub depths_discarded: u32,
}

impl SearchStats {
    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only when there was nothing to play
    pub best_move: Option<Pos>,
    /// Minimax score of the best move, Black's point of view
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    /// Total nodes searched, including abandoned iterations
    pub nodes: u64,
    pub elapsed: Duration,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Iterative-deepening minimax searcher.
///
/// Owns its transposition table, which is cleared at the start of every
/// search.
pub struct Searcher {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    max_depth: u8,
    max_candidates: usize,
    proximity: u8,
    nodes: u64,
    stats: SearchStats,
    /// Set once the stop condition fires; unwinds the current iteration
    aborted: bool,
}

impl Searcher {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(config.tt_size_mb),
            max_depth: config.max_depth.max(1),
            max_candidates: config.max_candidates.max(1),
            proximity: config.proximity,
            nodes: 0,
            stats: SearchStats::default(),
            aborted: false,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Search for the best move for `mover`.
    ///
    /// `board` is not modified; the search runs on a private copy with
    /// `mover` to move.
    pub fn search<S: StopCondition>(&mut self, board: &Board, mover: Player, stop: &S) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.aborted = false;
        self.tt.clear();

        let mut work = board.clone();
        work.set_mover(mover);

        let root = candidates::select(&work, self.max_candidates, self.proximity);
        let root = candidates::order(&mut work, root);

        let mut result = SearchResult {
            best_move: root.first().copied(),
            score: 0,
            depth: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
            stats: SearchStats::default(),
        };

        if root.is_empty() {
            debug!("no legal moves for {mover}");
            result.elapsed = start.elapsed();
            return result;
        }

        for depth in 1..=self.max_depth {
            match self.search_root(&mut work, &root, depth, stop) {
                Some((pos, score)) => {
                    debug!("depth {depth} complete: {pos} score {score} ({} nodes)", self.nodes);
                    result.best_move = Some(pos);
                    result.score = score;
                    result.depth = depth;
                }
                None => {
                    self.stats.depths_discarded += 1;
                    debug!("depth {depth} abandoned after {} nodes", self.nodes);
                    break;
                }
            }
        }

        result.nodes = self.nodes;
        result.elapsed = start.elapsed();
        result.stats = self.stats;

        info!(
            "{mover} search: move {} score {} depth {} nodes {} in {:?}",
            result.best_move.map_or_else(|| "-".to_string(), |p| p.to_string()),
            result.score,
            result.depth,
            result.nodes,
            result.elapsed
        );

        result
    }

    /// One full pass over the root moves at `depth`.
    ///
    /// Returns `None` when the stop condition cut the pass short.
    fn search_root<S: StopCondition>(
        &mut self,
        board: &mut Board,
        moves: &[Pos],
        depth: u8,
        stop: &S,
    ) -> Option<(Pos, i32)> {
        let maximizing = board.mover() == Player::Black;
        let mut alpha = -INF;
        let mut beta = INF;
        let mut best: Option<(Pos, i32)> = None;

        for &pos in moves {
            if depth > 1 && stop.should_stop() {
                self.aborted = true;
                return None;
            }

            let Ok(applied) = apply(board, pos) else {
                continue;
            };
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing, stop);
            revert(board, &applied);

            if self.aborted {
                return None;
            }

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((pos, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        best
    }

    /// Minimax with alpha-beta pruning. Scores are from Black's view.
    fn minimax<S: StopCondition>(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        stop: &S,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_over() {
            return evaluate(board, Player::Black);
        }

        if stop.should_stop() {
            self.aborted = true;
            return 0;
        }

        let hash = self.zobrist.hash(board);
        let key = board.key();
        self.stats.tt_probes += 1;
        if let Some(score) = self.tt.probe(hash, &key, depth) {
            self.stats.tt_hits += 1;
            return score;
        }

        let moves = candidates::select(board, self.max_candidates, self.proximity);
        if moves.is_empty() {
            return evaluate(board, Player::Black);
        }

        let mut best = if maximizing { -INF } else { INF };
        for pos in moves {
            let Ok(applied) = apply(board, pos) else {
                continue;
            };
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing, stop);
            revert(board, &applied);

            if self.aborted {
                return 0;
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.tt.store(hash, key, depth, best);
        best
    }
}
