//! Game rules for 8x8 Othello
//!
//! This module implements the rule set:
//! - Legal move generation (bracketing in 8 directions)
//! - Move application and undo (flip propagation)
//! - Pass and terminal detection, scoring

pub mod flip;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{apply_move, make_move, undo_move, MoveRecord};
pub use moves::{flips_for, has_any_move, is_legal_move, legal_move_mask, legal_moves, mobility};
pub use outcome::{is_terminal, score, winner, Winner};
