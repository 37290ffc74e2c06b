//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(k) incremental hash updates when a move places
//! one piece and flips k others. This is essential for efficient
//! transposition table lookups during search.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player, Pos};
//! use othello::rules::make_move;
//! use othello::search::ZobristTable;
//!
//! let zt = ZobristTable::global();
//! let mut board = Board::new();
//!
//! let hash1 = zt.hash(&board, Player::Black);
//!
//! let record = make_move(&mut board, Player::Black, Pos::new(2, 3)).unwrap();
//! let hash2 = zt.hash(&board, Player::White);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(zt.update_move(hash1, &record), hash2);
//! ```

use std::sync::OnceLock;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::rules::MoveRecord;

/// Seed of the process-wide table
const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;

static GLOBAL: OnceLock<ZobristTable> = OnceLock::new();

/// Zobrist hash table for position hashing.
///
/// Uses XOR-based hashing with precomputed random values for each
/// (cell, owner) combination plus one value for the side to move.
pub struct ZobristTable {
    /// Random values per player (Black = 0, White = 1) per cell
    pieces: [[u64; TOTAL_CELLS]; 2],
    /// Random value XORed when Black is to move
    black_to_move: u64,
}

impl ZobristTable {
    /// Create a table from a seed. Same seed, same keys.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut pieces = [[0u64; TOTAL_CELLS]; 2];
        for side in &mut pieces {
            for key in side.iter_mut() {
                *key = rng.gen();
            }
        }

        Self {
            pieces,
            black_to_move: rng.gen(),
        }
    }

    /// Process-wide table, built on first use and read-only afterwards.
    pub fn global() -> &'static ZobristTable {
        GLOBAL.get_or_init(|| ZobristTable::new(DEFAULT_SEED))
    }

    #[inline]
    fn piece_key(&self, pos: Pos, player: Player) -> u64 {
        self.pieces[player.index()][pos.to_index()]
    }

    /// Compute the full hash for a board position.
    ///
    /// Iterates over every occupied cell. During search use
    /// [`update_move`](Self::update_move) instead.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Player) -> u64 {
        let mut h = 0u64;

        for player in [Player::Black, Player::White] {
            for pos in board.pieces(player).iter_ones() {
                h ^= self.piece_key(pos, player);
            }
        }

        if side_to_move == Player::Black {
            h ^= self.black_to_move;
        }

        h
    }

    /// Incrementally update the hash for a move.
    ///
    /// Adds the placed piece, swaps owner on every flipped cell and toggles
    /// the side to move. Applying it twice reverts the update, so it also
    /// serves for undo.
    #[inline]
    #[must_use]
    pub fn update_move(&self, hash: u64, record: &MoveRecord) -> u64 {
        let mover = record.player.index();
        let other = record.player.opponent().index();

        let mut h = hash ^ self.pieces[mover][record.pos.to_index()] ^ self.black_to_move;
        for pos in record.flipped.iter_ones() {
            let idx = pos.to_index();
            h ^= self.pieces[mover][idx] ^ self.pieces[other][idx];
        }
        h
    }

    /// Toggle the side-to-move component of the hash.
    ///
    /// Used for passes, where the side changes without placing a piece.
    #[inline]
    #[must_use]
    pub fn toggle_side(&self, hash: u64) -> u64 {
        hash ^ self.black_to_move
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::rules::{legal_moves, make_move, undo_move};

    #[test]
    fn test_zobrist_empty_board() {
        let zt = ZobristTable::default();
        let board = Board::empty();

        assert_eq!(zt.hash(&board, Player::White), 0);
        assert_eq!(zt.hash(&board, Player::Black), zt.black_to_move);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let zt1 = ZobristTable::new(7);
        let zt2 = ZobristTable::new(7);
        let board = Board::new();

        assert_eq!(
            zt1.hash(&board, Player::Black),
            zt2.hash(&board, Player::Black)
        );
        assert_ne!(
            ZobristTable::new(8).hash(&board, Player::Black),
            zt1.hash(&board, Player::Black)
        );
    }

    #[test]
    fn test_zobrist_global_is_shared() {
        let a = ZobristTable::global() as *const ZobristTable;
        let b = ZobristTable::global() as *const ZobristTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_zobrist_incremental() {
        let zt = ZobristTable::global();
        let mut board = Board::new();
        let mut hash = zt.hash(&board, Player::Black);
        let mut player = Player::Black;

        // Follow the first legal move for a few plies
        for _ in 0..10 {
            let Some(&pos) = legal_moves(&board, player).first() else {
                break;
            };
            let record = make_move(&mut board, player, pos).unwrap();
            hash = zt.update_move(hash, &record);
            player = player.opponent();
            assert_eq!(hash, zt.hash(&board, player));
        }
    }

    #[test]
    fn test_zobrist_undo() {
        let zt = ZobristTable::global();
        let mut board = Board::new();
        let start = zt.hash(&board, Player::Black);

        let record = make_move(&mut board, Player::Black, Pos::new(5, 4)).unwrap();
        let moved = zt.update_move(start, &record);
        undo_move(&mut board, &record);

        assert_eq!(zt.update_move(moved, &record), start);
        assert_eq!(zt.hash(&board, Player::Black), start);
    }

    #[test]
    fn test_zobrist_same_position_different_path() {
        let zt = ZobristTable::global();
        let mut board1 = Board::empty();
        let mut board2 = Board::empty();

        board1.set(Pos::new(0, 0), Cell::Black);
        board1.set(Pos::new(7, 7), Cell::White);

        board2.set(Pos::new(7, 7), Cell::White);
        board2.set(Pos::new(0, 0), Cell::Black);

        assert_eq!(
            zt.hash(&board1, Player::Black),
            zt.hash(&board2, Player::Black)
        );
    }

    #[test]
    fn test_zobrist_owner_matters() {
        let zt = ZobristTable::global();
        let mut board1 = Board::empty();
        let mut board2 = Board::empty();
        board1.set(Pos::new(3, 3), Cell::Black);
        board2.set(Pos::new(3, 3), Cell::White);

        assert_ne!(
            zt.hash(&board1, Player::Black),
            zt.hash(&board2, Player::Black)
        );
    }

    #[test]
    fn test_zobrist_toggle_side() {
        let zt = ZobristTable::global();
        let board = Board::new();
        let black = zt.hash(&board, Player::Black);
        assert_eq!(zt.toggle_side(black), zt.hash(&board, Player::White));
    }
}
