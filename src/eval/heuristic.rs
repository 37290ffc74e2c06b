//! Heuristic evaluation function for Othello board positions
//!
//! This module provides the leaf evaluation for the negamax search.
//! It scores positions based on:
//! - Terminal detection (final piece difference, scaled)
//! - Material (piece difference)
//! - Mobility (legal move difference)
//! - Positional weights (corners good, X-squares bad)
//!
//! Every term is antisymmetric:
//! `evaluate(board, p) == -evaluate(board, p.opponent())`.

use crate::board::{Board, Player};
use crate::rules::mobility;

use super::weights::{EvalWeights, TERMINAL_SCALE};

/// Evaluate the board from the perspective of `player` with default weights.
///
/// Positive values favor `player`. Finished games score
/// `TERMINAL_SCALE * (own pieces - opponent pieces)`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    evaluate_with(board, player, &EvalWeights::default())
}

/// Evaluate with explicit weights.
#[must_use]
pub fn evaluate_with(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let opponent = player.opponent();
    let material = material_diff(board, player);

    let own_moves = mobility(board, player) as i32;
    let opp_moves = mobility(board, opponent) as i32;

    // Neither side can move: game over
    if own_moves == 0 && opp_moves == 0 {
        return material * TERMINAL_SCALE;
    }

    weights.material * material
        + weights.mobility * (own_moves - opp_moves)
        + positional_score(board, player, weights)
}

/// Piece difference, `player` minus opponent
#[inline]
fn material_diff(board: &Board, player: Player) -> i32 {
    board.count(player) as i32 - board.count(player.opponent()) as i32
}

/// Sum of cell weights, own pieces positive, opponent pieces negative
#[inline]
pub fn positional_score(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let own: i32 = board.pieces(player).iter_ones().map(|p| weights.at(p)).sum();
    let opp: i32 = board
        .pieces(player.opponent())
        .iter_ones()
        .map(|p| weights.at(p))
        .sum();
    own - opp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos, BOARD_SIZE};
    use crate::rules::make_move;

    #[test]
    fn test_evaluate_initial_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn test_evaluate_antisymmetric() {
        let mut board = Board::new();
        make_move(&mut board, Player::Black, Pos::new(2, 3)).unwrap();
        make_move(&mut board, Player::White, Pos::new(2, 2)).unwrap();

        let black = evaluate(&board, Player::Black);
        let white = evaluate(&board, Player::White);
        assert_eq!(black, -white);
    }

    #[test]
    fn test_corner_beats_x_square() {
        let mut corner = Board::new();
        corner.set(Pos::new(0, 0), Cell::Black);

        let mut x_square = Board::new();
        x_square.set(Pos::new(1, 1), Cell::Black);

        let corner_score = evaluate(&corner, Player::Black);
        let x_score = evaluate(&x_square, Player::Black);
        assert!(
            corner_score > x_score,
            "Corner ({}) should beat X-square ({})",
            corner_score,
            x_score
        );
    }

    #[test]
    fn test_terminal_win_dominates() {
        // Black wins by a single piece on an otherwise dead board
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::Black);
        board.set(Pos::new(0, 1), Cell::Black);
        board.set(Pos::new(7, 7), Cell::White);
        let score = evaluate(&board, Player::Black);
        assert_eq!(score, TERMINAL_SCALE);
        assert_eq!(evaluate(&board, Player::White), -TERMINAL_SCALE);
    }

    #[test]
    fn test_terminal_draw_is_zero() {
        let mut board = Board::empty();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let cell = if c < 4 { Cell::Black } else { Cell::White };
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        assert_eq!(evaluate(&board, Player::Black), 0);
    }

    #[test]
    fn test_positional_score_sign() {
        let weights = EvalWeights::default();
        let mut board = Board::empty();
        board.set(Pos::new(7, 0), Cell::White);
        assert_eq!(positional_score(&board, Player::White, &weights), 100);
        assert_eq!(positional_score(&board, Player::Black, &weights), -100);
    }

    #[test]
    fn test_custom_weights_change_score() {
        let mut board = Board::new();
        make_move(&mut board, Player::Black, Pos::new(2, 3)).unwrap();

        let heavy_material = EvalWeights {
            material: 10,
            ..EvalWeights::default()
        };
        assert!(
            evaluate_with(&board, Player::Black, &heavy_material)
                > evaluate(&board, Player::Black)
        );
    }
}
