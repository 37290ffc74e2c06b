//! Error types for the Othello engine
//!
//! Only recoverable, caller-facing failures live here. Broken board
//! invariants are logic bugs and abort via assertions instead.

use thiserror::Error;

/// Errors that can occur while driving a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// Move is on the board but captures nothing (or the cell is occupied)
    #[error("Illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    /// Coordinates outside 0-7
    #[error("Invalid coordinate ({row}, {col}) (must be 0-7)")]
    InvalidCoordinate { row: i32, col: i32 },

    /// A move was submitted after the game ended
    #[error("Game is over")]
    GameOver,

    /// A move was submitted while the AI side is to move
    #[error("Not your turn")]
    NotHumanTurn,

    /// Engine configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Starting position rejected by validation
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, OthelloError>;
