//! Gomoku AI Engine with pair captures
//!
//! A Gomoku rule engine and minimax AI for the capture variant:
//! - Standard 19x19 board, Black moves first
//! - 5-in-a-row to win (overlines allowed)
//! - Capture win: 10 captured stones (5 pairs)
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair
//! - Double-three forbidden for both colors
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Game rules (capture, win, forbidden moves, apply/revert)
//! - [`eval`]: Static position evaluation
//! - [`search`]: Iterative-deepening alpha-beta with a transposition table
//! - [`engine`]: AI entry point with time budget and cancellation
//! - [`game`]: Game session with history and undo
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, EngineConfig, Game, Pos};
//!
//! let mut game = Game::new();
//! game.play(Pos::new(9, 9)).unwrap();
//!
//! // Use smaller depth for faster doc test
//! let config = EngineConfig { max_depth: 2, time_limit_ms: 200, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//!
//! // AI responds as White
//! let pos = engine.get_best_move(game.board(), game.mover()).unwrap();
//! game.play(pos).unwrap();
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameStatus, Player, Pos, Stone, BOARD_SIZE};
pub use config::{AppConfig, EngineConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, GameError};
pub use eval::evaluate;
pub use game::Game;
pub use rules::RuleSet;
