//! Evaluation module for Othello positions
//!
//! This module provides the fixed heuristic used at search leaves.
//! The evaluation considers:
//! - Material and mobility differences
//! - Positional weights from a configurable 8x8 table
//! - Finished games, scaled to dominate every heuristic score

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_with, positional_score};
pub use weights::{EvalWeights, PositionalTable, POSITIONAL_WEIGHTS, TERMINAL_SCALE};
