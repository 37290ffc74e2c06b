//! Move application with an explicit inverse record
//!
//! `make_move` / `undo_move` are the search's apply/undo pair; `apply_move`
//! is the validating entry point used by the session. A move either fully
//! applies or is rejected before any cell changes.

use crate::board::{Bitboard, Board, Player, Pos};
use crate::error::{OthelloError, Result};

use super::moves::flips_for;

/// Everything needed to revert a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Cell the piece was placed on (was empty before)
    pub pos: Pos,
    /// Player who moved
    pub player: Player,
    /// Opponent pieces turned to `player`
    pub flipped: Bitboard,
}

impl MoveRecord {
    /// Number of flipped pieces
    #[inline]
    pub fn flip_count(&self) -> u32 {
        self.flipped.count()
    }
}

/// Place a piece and flip every bracketed run.
///
/// Returns `None` (board untouched) if the move flips nothing.
#[inline]
pub fn make_move(board: &mut Board, player: Player, pos: Pos) -> Option<MoveRecord> {
    let flipped = flips_for(board, pos, player);
    if flipped.is_empty() {
        return None;
    }

    *board.pieces_mut(player) ^= flipped;
    *board.pieces_mut(player.opponent()) ^= flipped;
    board.pieces_mut(player).set(pos);
    debug_assert!(board.is_consistent());

    Some(MoveRecord {
        pos,
        player,
        flipped,
    })
}

/// Revert a move made by [`make_move`]. Must be applied in LIFO order.
#[inline]
pub fn undo_move(board: &mut Board, record: &MoveRecord) {
    board.pieces_mut(record.player).clear(record.pos);
    *board.pieces_mut(record.player) ^= record.flipped;
    *board.pieces_mut(record.player.opponent()) ^= record.flipped;
    debug_assert!(board.is_consistent());
}

/// Validate and apply a move.
///
/// # Errors
///
/// `IllegalMove` if the placement captures nothing; the board is unchanged.
pub fn apply_move(board: &mut Board, player: Player, pos: Pos) -> Result<MoveRecord> {
    make_move(board, player, pos).ok_or(OthelloError::IllegalMove {
        row: pos.row,
        col: pos.col,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_apply_opening_move() {
        let mut board = Board::new();
        let record = apply_move(&mut board, Player::Black, Pos::new(2, 3)).unwrap();

        assert_eq!(record.flip_count(), 1);
        assert_eq!(board.get(Pos::new(2, 3)), Cell::Black);
        assert_eq!(board.get(Pos::new(3, 3)), Cell::Black);
        assert_eq!(board.count(Player::Black), 4);
        assert_eq!(board.count(Player::White), 1);
    }

    #[test]
    fn test_illegal_move_leaves_board() {
        let mut board = Board::new();
        let before = board;

        let err = apply_move(&mut board, Player::Black, Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, OthelloError::IllegalMove { row: 0, col: 0 });
        assert_eq!(board, before);

        // Occupied cell
        assert!(apply_move(&mut board, Player::Black, Pos::new(3, 3)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_restores_exact_board() {
        let mut board = Board::new();
        let start = board;

        let r1 = make_move(&mut board, Player::Black, Pos::new(2, 3)).unwrap();
        let mid = board;
        let r2 = make_move(&mut board, Player::White, Pos::new(2, 2)).unwrap();

        undo_move(&mut board, &r2);
        assert_eq!(board, mid);
        undo_move(&mut board, &r1);
        assert_eq!(board, start);
    }

    #[test]
    fn test_multi_direction_flip() {
        // Black at (2,2) brackets (2,3) via the row and (3,3) via the diagonal
        let mut board = Board::empty();
        board.set(Pos::new(2, 3), Cell::White);
        board.set(Pos::new(2, 4), Cell::Black);
        board.set(Pos::new(3, 3), Cell::White);
        board.set(Pos::new(4, 4), Cell::Black);

        let record = make_move(&mut board, Player::Black, Pos::new(2, 2)).unwrap();
        assert_eq!(record.flip_count(), 2);
        assert_eq!(board.count(Player::White), 0);
        assert_eq!(board.count(Player::Black), 5);
    }
}
