//! Move ordering for alpha-beta search
//!
//! Better ordering narrows the effective branching factor. Priority:
//! 1. Best move cached in the transposition table
//! 2. Corner moves
//! 3. Static evaluation of the resulting position
//!
//! The sort is stable, so equal keys keep row-major order and the result
//! is deterministic.

use std::cmp::Reverse;

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate_with, EvalWeights};
use crate::rules::make_move;

/// Sort `moves` in place, most promising first.
///
/// `moves` must be legal for `player` on `board`.
pub fn order_moves(
    board: &Board,
    player: Player,
    moves: &mut [Pos],
    tt_move: Option<Pos>,
    weights: &EvalWeights,
) {
    if moves.len() < 2 {
        return;
    }
    moves.sort_by_cached_key(|&mov| Reverse(score_move(board, player, mov, tt_move, weights)));
}

/// Ordering key: (is TT move, is corner, static eval after the move)
fn score_move(
    board: &Board,
    player: Player,
    mov: Pos,
    tt_move: Option<Pos>,
    weights: &EvalWeights,
) -> (bool, bool, i32) {
    let mut child = *board;
    let eval = match make_move(&mut child, player, mov) {
        Some(_) => evaluate_with(&child, player, weights),
        None => i32::MIN,
    };
    (tt_move == Some(mov), mov.is_corner(), eval)
}
