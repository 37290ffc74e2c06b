//! Othello AI Engine
//!
//! An Othello (Reversi) engine for the standard 8x8 rule set:
//! - 8x8 board, Black moves first from the four-piece center start
//! - A move must bracket and flip at least one opponent run
//! - A player with no legal move passes; the game ends when neither can move
//! - Most pieces wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Game rules (legal moves, flips, passes, scoring)
//! - [`eval`]: Position evaluation and weight tables
//! - [`search`]: Alpha-beta search, transposition table, Zobrist hashing
//! - [`session`]: Game session driving human and AI turns
//! - [`config`]: Engine configuration
//!
//! # Quick Start
//!
//! ```
//! use othello::{EngineConfig, GameMode, GameSession, Player};
//!
//! // Keep the doc test fast
//! let config = EngineConfig::default().with_time_budget_ms(20).with_max_depth(3);
//! let mut session = GameSession::new(config, GameMode::VsAi { ai: Player::White }).unwrap();
//!
//! // Human plays Black; the AI replies before submit_move returns
//! let state = session.submit_move(2, 3).unwrap();
//! assert_eq!(state.current_player, Player::Black);
//! assert_eq!(state.move_count, 2);
//! ```
//!
//! # Search
//!
//! The AI move comes from iterative-deepening negamax with alpha-beta
//! pruning under a per-move time budget:
//! 1. Depth 1, 2, 3, ... until the deadline, the depth cap, or the end of
//!    the game tree
//! 2. Each iteration orders moves by TT move, corners, static evaluation
//! 3. An iteration interrupted by the deadline is discarded
//! 4. If not even depth 1 finishes, a plain depth-1 minimax answers

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use error::{OthelloError, Result};
pub use eval::EvalWeights;
pub use rules::Winner;
pub use search::{SearchResult, Searcher};
pub use session::{GameMode, GameSession, GameState, Turn};
