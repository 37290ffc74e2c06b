//! Search module for the Othello AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Move ordering
//! - Alpha-Beta search with iterative deepening
//! - Unpruned minimax, the reference the pruned search must agree with

pub mod alphabeta;
pub mod minimax;
pub mod ordering;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher, MAX_SEARCH_DEPTH};
pub use minimax::minimax;
pub use ordering::order_moves;
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
