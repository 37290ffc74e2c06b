//! Legal move generation
//!
//! A placement is legal for a player iff, in at least one of the eight
//! directions, it is followed by one or more opponent pieces and then one
//! of the player's own pieces.

use crate::board::{Bitboard, Board, Player, Pos};

/// Direction vectors (8 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Opponent run bracketed in one direction from `pos`, or empty.
#[inline]
fn flips_in_direction(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> Bitboard {
    let own = player.cell();
    let opp = player.opponent().cell();
    let mut run = Bitboard::new();
    let mut cursor = pos.offset(dr, dc);

    while let Some(p) = cursor {
        let cell = board.get(p);
        if cell == opp {
            run.set(p);
        } else if cell == own {
            return run;
        } else {
            return Bitboard::new();
        }
        cursor = p.offset(dr, dc);
    }

    // Ran off the board without closing the bracket
    Bitboard::new()
}

/// All opponent pieces that a placement at `pos` would flip.
///
/// Empty result means the move is illegal. Occupied cells never flip anything.
#[must_use]
pub fn flips_for(board: &Board, pos: Pos, player: Player) -> Bitboard {
    if !board.is_empty(pos) {
        return Bitboard::new();
    }
    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dr, dc)| {
            acc | flips_in_direction(board, pos, player, dr, dc)
        })
}

/// Check whether placing at `pos` is legal for `player`
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !flips_in_direction(board, pos, player, dr, dc).is_empty())
}

/// Bitboard of every legal placement for `player`
#[must_use]
pub fn legal_move_mask(board: &Board, player: Player) -> Bitboard {
    let mut mask = Bitboard::new();
    for pos in board.empty_cells().iter_ones() {
        if is_legal_move(board, pos, player) {
            mask.set(pos);
        }
    }
    mask
}

/// Legal moves in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    legal_move_mask(board, player).iter_ones().collect()
}

/// Number of legal moves
#[inline]
#[must_use]
pub fn mobility(board: &Board, player: Player) -> u32 {
    legal_move_mask(board, player).count()
}

/// True iff `player` has at least one legal move (otherwise the turn is a pass)
#[must_use]
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .empty_cells()
        .iter_ones()
        .any(|pos| is_legal_move(board, pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn color_swapped(board: &Board) -> Board {
        Board {
            black: board.white,
            white: board.black,
        }
    }

    #[test]
    fn test_initial_black_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_initial_white_moves_on_swapped_board() {
        let board = color_swapped(&Board::new());
        let moves = legal_moves(&board, Player::White);
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_initial_white_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::White);
        assert_eq!(
            moves,
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_flips_for_single_line() {
        let board = Board::new();
        let flips = flips_for(&board, Pos::new(2, 3), Player::Black);
        assert_eq!(flips.iter_ones().collect::<Vec<_>>(), vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_occupied_cell_is_never_legal() {
        let board = Board::new();
        assert!(!is_legal_move(&board, Pos::new(3, 3), Player::Black));
        assert!(flips_for(&board, Pos::new(3, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_unbracketed_run_is_not_legal() {
        // W W W run from (0,3) reaches the edge without a closing piece
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Cell::White);
        board.set(Pos::new(0, 1), Cell::White);
        board.set(Pos::new(0, 2), Cell::White);
        assert!(!is_legal_move(&board, Pos::new(0, 3), Player::Black));

        board.set(Pos::new(0, 0), Cell::Black);
        let flips = flips_for(&board, Pos::new(0, 3), Player::Black);
        assert_eq!(flips.count(), 2);
    }

    #[test]
    fn test_multiple_directions() {
        // Placing at (2,2) brackets along the row and the diagonal
        let mut board = Board::empty();
        board.set(Pos::new(2, 3), Cell::White);
        board.set(Pos::new(2, 4), Cell::Black);
        board.set(Pos::new(3, 3), Cell::White);
        board.set(Pos::new(4, 4), Cell::Black);
        board.set(Pos::new(3, 2), Cell::White);

        let flips = flips_for(&board, Pos::new(2, 2), Player::Black);
        let flipped: Vec<Pos> = flips.iter_ones().collect();
        assert_eq!(flipped, vec![Pos::new(2, 3), Pos::new(3, 3)]);
    }

    #[test]
    fn test_has_any_move_empty_board() {
        let board = Board::empty();
        assert!(!has_any_move(&board, Player::Black));
        assert!(!has_any_move(&board, Player::White));
        assert_eq!(mobility(&Board::new(), Player::Black), 4);
    }
}
