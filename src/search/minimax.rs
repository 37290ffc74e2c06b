//! Unpruned negamax reference search
//!
//! Visits the full tree to a fixed depth with no pruning, caching or
//! ordering. The alpha-beta searcher must agree with it on score and move;
//! it is also the searcher's depth-1 fallback when the deadline expires
//! before the first iteration completes.

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate_with, EvalWeights};
use crate::rules::{is_terminal, legal_moves, make_move};

/// Fixed-depth minimax from `player`'s perspective.
///
/// Returns the score and the best move. Ties go to the move earliest in
/// row-major order. A pass at the root yields `None`; a finished game or
/// `depth <= 0` yields the static evaluation.
#[must_use]
pub fn minimax(
    board: &Board,
    player: Player,
    depth: i8,
    weights: &EvalWeights,
) -> (i32, Option<Pos>) {
    if depth <= 0 || is_terminal(board) {
        return (evaluate_with(board, player, weights), None);
    }

    let moves = legal_moves(board, player);
    if moves.is_empty() {
        // Pass: same depth, turn goes to the opponent
        let (score, _) = minimax(board, player.opponent(), depth, weights);
        return (-score, None);
    }

    let mut best_score = i32::MIN;
    let mut best_move = None;
    for mov in moves {
        let mut child = *board;
        if make_move(&mut child, player, mov).is_none() {
            continue;
        }
        let (score, _) = minimax(&child, player.opponent(), depth - 1, weights);
        let score = -score;
        if score > best_score {
            best_score = score;
            best_move = Some(mov);
        }
    }

    (best_score, best_move)
}
